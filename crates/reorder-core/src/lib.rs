//! Reorder Core
//!
//! Ordering engine shared by the frontend and the server.
//!
//! - item: orderable items, checklist discriminator, scope keys
//! - sequence: array move and dense resequencing
//! - payload: `{id, order}` payload construction and validation
//! - guard: derived reorder guard
//! - session: drag session controller (optimistic update with rollback)
//! - backend: contracts the controller consumes from the persistence layer
//! - autosave: debounced field autosave state machine

pub mod autosave;
pub mod backend;
pub mod error;
pub mod guard;
pub mod item;
pub mod payload;
pub mod sequence;
pub mod session;

#[cfg(test)]
mod testing;

pub use autosave::{FieldAutosave, InteractionPhase, Ticket, DEBOUNCE_WINDOW_MS};
pub use backend::{FieldPatch, NewItem, ScopeBackend};
pub use error::{BackendError, PayloadError, ReorderError};
pub use guard::{GuardReason, ReorderGuard};
pub use item::{ChecklistKind, Orderable, ScopeKey};
pub use payload::{append_to_group, build_grouped_payload, build_payload, canonical, validate_payload, OrderEntry};
pub use sequence::{array_move, is_dense, next_order_index, position_of, resequence, sorted_active};
pub use session::{complete_drag, DragOutcome, DragRejected, DragResult, DragSession};
