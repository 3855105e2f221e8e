//! Reorder Guard
//!
//! Derived on every render from the list's busy state. While engaged no drag
//! session may begin.

use crate::item::ScopeKey;

/// Why dragging is currently disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardReason {
    /// A create/update/delete/reorder request for this scope is in flight
    RequestInFlight,
    /// An item of this scope has its edit dialog open
    Editing,
    /// An item of this scope awaits delete confirmation
    PendingDelete,
    /// Fewer than two active items, nothing to reorder
    TooFewItems,
    /// The selected sidebar scope is not this list's scope
    ScopeMismatch,
}

/// Inputs of the reorder guard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderGuard {
    pub in_flight: bool,
    pub editing: Option<String>,
    pub pending_delete: Option<String>,
    pub active_count: usize,
    /// Scope currently selected in the sidebar
    pub selected_scope: Option<ScopeKey>,
    /// The list's own scope; only set for lists that must match the selection
    pub list_scope: Option<ScopeKey>,
}

impl ReorderGuard {
    pub fn new(active_count: usize) -> Self {
        Self {
            active_count,
            ..Default::default()
        }
    }

    pub fn in_flight(mut self, in_flight: bool) -> Self {
        self.in_flight = in_flight;
        self
    }

    pub fn editing(mut self, id: Option<String>) -> Self {
        self.editing = id;
        self
    }

    pub fn pending_delete(mut self, id: Option<String>) -> Self {
        self.pending_delete = id;
        self
    }

    /// Require the sidebar selection to match `list_scope`
    pub fn scoped(mut self, list_scope: ScopeKey, selected_scope: Option<ScopeKey>) -> Self {
        self.list_scope = Some(list_scope);
        self.selected_scope = selected_scope;
        self
    }

    /// First matching reason, if any
    pub fn reason(&self) -> Option<GuardReason> {
        if self.in_flight {
            return Some(GuardReason::RequestInFlight);
        }
        if self.editing.is_some() {
            return Some(GuardReason::Editing);
        }
        if self.pending_delete.is_some() {
            return Some(GuardReason::PendingDelete);
        }
        if self.active_count < 2 {
            return Some(GuardReason::TooFewItems);
        }
        if let Some(list_scope) = &self.list_scope {
            if self.selected_scope.as_ref() != Some(list_scope) {
                return Some(GuardReason::ScopeMismatch);
            }
        }
        None
    }

    pub fn is_engaged(&self) -> bool {
        self.reason().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subsection(id: &str) -> ScopeKey {
        ScopeKey::Subsection(id.to_string())
    }

    #[test]
    fn test_idle_list_is_draggable() {
        assert_eq!(ReorderGuard::new(3).reason(), None);
        assert!(!ReorderGuard::new(2).is_engaged());
    }

    #[test]
    fn test_each_condition_engages() {
        assert_eq!(ReorderGuard::new(3).in_flight(true).reason(), Some(GuardReason::RequestInFlight));
        assert_eq!(
            ReorderGuard::new(3).editing(Some("a".into())).reason(),
            Some(GuardReason::Editing)
        );
        assert_eq!(
            ReorderGuard::new(3).pending_delete(Some("b".into())).reason(),
            Some(GuardReason::PendingDelete)
        );
        assert_eq!(ReorderGuard::new(1).reason(), Some(GuardReason::TooFewItems));
        assert_eq!(ReorderGuard::new(0).reason(), Some(GuardReason::TooFewItems));
    }

    #[test]
    fn test_scope_must_match_selection() {
        let guard = ReorderGuard::new(3).scoped(subsection("s1"), Some(subsection("s2")));
        assert_eq!(guard.reason(), Some(GuardReason::ScopeMismatch));

        let guard = ReorderGuard::new(3).scoped(subsection("s1"), None);
        assert!(guard.is_engaged());

        let guard = ReorderGuard::new(3).scoped(subsection("s1"), Some(subsection("s1")));
        assert!(!guard.is_engaged());
    }

    #[test]
    fn test_in_flight_wins_over_other_reasons() {
        let guard = ReorderGuard::new(0).in_flight(true).pending_delete(Some("x".into()));
        assert_eq!(guard.reason(), Some(GuardReason::RequestInFlight));
    }
}
