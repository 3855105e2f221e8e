//! UI Components
//!
//! Reusable Leptos components.

mod autosave_field;
mod checklist_panel;
mod checklist_row;
mod delete_confirm_button;
mod deleted_items;
mod error_banner;
mod named_item_list;
mod new_item_form;
mod rename_input;
mod seed_button;

pub use autosave_field::{AutosaveField, TrackedField};
pub use checklist_panel::ChecklistPanel;
pub use checklist_row::ChecklistRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use deleted_items::DeletedItems;
pub use error_banner::ErrorBanner;
pub use named_item_list::NamedItemList;
pub use new_item_form::NewItemForm;
pub use rename_input::RenameInput;
pub use seed_button::SeedButton;
