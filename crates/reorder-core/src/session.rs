//! Drag Session Controller
//!
//! Translates a completed drag gesture (source id, destination id) into a new
//! local order, applies it optimistically and submits one bulk reorder. When
//! the submission fails the pre-drag order is restored.

use thiserror::Error;

use crate::backend::ScopeBackend;
use crate::error::ReorderError;
use crate::guard::{GuardReason, ReorderGuard};
use crate::item::{ChecklistKind, Orderable, ScopeKey};
use crate::payload::{build_grouped_payload, build_payload, OrderEntry};
use crate::sequence::{array_move, position_of, resequence, sorted_active};

/// Result of moving one item within an ordered list
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome<T> {
    pub old_index: usize,
    pub new_index: usize,
    /// New order, resequenced `1..=n`
    pub reordered: Vec<T>,
    /// Order before the move
    pub snapshot: Vec<T>,
}

/// Move `source_id` to the position of `dest_id`.
///
/// Returns `None` when both ids are equal or either id is not in `items`
/// (stale state).
pub fn complete_drag<T: Orderable + Clone>(items: &[T], source_id: &str, dest_id: &str) -> Option<DragOutcome<T>> {
    if source_id == dest_id {
        return None;
    }
    let old_index = position_of(items, source_id)?;
    let new_index = position_of(items, dest_id)?;

    let mut reordered = items.to_vec();
    array_move(&mut reordered, old_index, new_index);
    resequence(&mut reordered);

    Some(DragOutcome {
        old_index,
        new_index,
        reordered,
        snapshot: items.to_vec(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragRejected {
    #[error("drag disabled: {0:?}")]
    Guarded(GuardReason),
    #[error("item {0} is not in this list")]
    UnknownItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragResult {
    /// Nothing to do (no drag in progress, same position, stale ids)
    Ignored,
    /// Persisted with this payload
    Applied(Vec<OrderEntry>),
}

/// Controller for one sibling list (or one discriminator group of a checklist scope)
#[derive(Debug, Clone)]
pub struct DragSession<T> {
    scope: ScopeKey,
    group: Option<ChecklistKind>,
    items: Vec<T>,
    /// The other discriminator group of the scope, if any
    other: Vec<T>,
    dragging: Option<String>,
    in_flight: bool,
}

impl<T: Orderable + Clone> DragSession<T> {
    /// Session over a single-group scope
    pub fn new(scope: ScopeKey, items: &[T]) -> Self {
        Self {
            scope,
            group: None,
            items: sorted_active(items),
            other: Vec::new(),
            dragging: None,
            in_flight: false,
        }
    }

    /// Session over one discriminator group; `all` holds both groups of the scope
    pub fn for_group(scope: ScopeKey, group: ChecklistKind, all: &[T]) -> Self {
        let (mine, other): (Vec<T>, Vec<T>) = all
            .iter()
            .cloned()
            .partition(|i| i.kind().unwrap_or_default() == group);
        Self {
            scope,
            group: Some(group),
            items: sorted_active(&mine),
            other: sorted_active(&other),
            dragging: None,
            in_flight: false,
        }
    }

    pub fn scope(&self) -> &ScopeKey {
        &self.scope
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Guard inputs this session knows about; callers add UI state on top
    pub fn guard(&self) -> ReorderGuard {
        ReorderGuard::new(self.items.len()).in_flight(self.in_flight)
    }

    /// Replace the list after a refetch
    pub fn replace(&mut self, items: &[T]) {
        match self.group {
            Some(group) => *self = Self::for_group(self.scope.clone(), group, items),
            None => self.items = sorted_active(items),
        }
        self.dragging = None;
    }

    pub fn begin_drag(&mut self, id: &str, guard: &ReorderGuard) -> Result<(), DragRejected> {
        if let Some(reason) = guard.reason().or_else(|| self.guard().reason()) {
            return Err(DragRejected::Guarded(reason));
        }
        if position_of(&self.items, id).is_none() {
            return Err(DragRejected::UnknownItem(id.to_string()));
        }
        self.dragging = Some(id.to_string());
        Ok(())
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// The order a drop onto `dest_id` would apply, for rendering before the
    /// submission resolves
    pub fn preview(&self, dest_id: &str) -> Option<Vec<T>> {
        let source_id = self.dragging.as_deref()?;
        complete_drag(&self.items, source_id, dest_id).map(|outcome| outcome.reordered)
    }

    /// Drop the dragged item onto `dest_id` and persist the new order.
    ///
    /// The guard is re-checked at drop time; an engaged guard leaves the list
    /// untouched and makes no backend call.
    pub async fn complete_drag<B>(
        &mut self,
        dest_id: &str,
        guard: &ReorderGuard,
        backend: &B,
    ) -> Result<DragResult, ReorderError>
    where
        B: ScopeBackend<Item = T> + ?Sized,
    {
        let Some(source_id) = self.dragging.take() else {
            return Ok(DragResult::Ignored);
        };
        if let Some(reason) = guard.reason().or_else(|| self.guard().reason()) {
            return Err(ReorderError::Guarded(reason));
        }
        let Some(outcome) = complete_drag(&self.items, &source_id, dest_id) else {
            log::debug!("drag {} -> {} ignored in {}", source_id, dest_id, self.scope);
            return Ok(DragResult::Ignored);
        };

        let payload = match self.group {
            Some(group) => build_grouped_payload(group, &outcome.reordered, &self.other),
            None => build_payload(&outcome.reordered),
        };

        self.items = outcome.reordered;
        self.in_flight = true;
        let submitted = backend.reorder_items(&self.scope, &payload).await;
        self.in_flight = false;

        match submitted {
            Ok(()) => {
                log::info!(
                    "reordered {} ({} moved {} -> {})",
                    self.scope,
                    source_id,
                    outcome.old_index,
                    outcome.new_index
                );
                Ok(DragResult::Applied(payload))
            }
            Err(err) => {
                log::warn!("reorder of {} failed, restoring previous order: {}", self.scope, err);
                self.items = outcome.snapshot;
                Err(ReorderError::Backend(err))
            }
        }
    }
}
