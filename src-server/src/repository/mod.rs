//! Repository Layer
//!
//! Data access abstractions and SQLite implementations.

mod backend;
mod checklist_repo;
mod db;
mod ordering;
mod section_repo;
mod subsection_repo;
mod template_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use backend::ScopedStore;
pub use checklist_repo::ChecklistRepository;
pub use db::{init_db, DbState, SharedConnection};
pub use section_repo::SectionRepository;
pub use subsection_repo::SubsectionRepository;
pub use template_repo::TemplateRepository;
pub use traits::{OrderedRepository, Repository};
