//! Debounced Field Autosave
//!
//! Each tracked text field keeps its local value, the debounced value and a
//! reference to the last value sent to the server. Every input issues a new
//! [`Ticket`]; the host starts a timer per ticket and calls
//! [`FieldAutosave::settle`] when it fires. Only the latest ticket settles, so
//! a burst of keystrokes yields at most one commit per quiet period.

/// Fixed debounce window
pub const DEBOUNCE_WINDOW_MS: u32 = 500;

/// Handle for one pending debounce timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Replaces "has the user interacted yet" flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// Server value shown, user has not typed
    Loaded,
    /// User has typed at least once; commits are allowed
    UserEditing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAutosave {
    local: String,
    debounced: String,
    last_sent: String,
    generation: u64,
    phase: InteractionPhase,
}

impl FieldAutosave {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field seeded from a server value
    pub fn loaded(server_value: &str) -> Self {
        let mut field = Self::new();
        field.refresh(server_value);
        field
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    pub fn last_sent(&self) -> &str {
        &self.last_sent
    }

    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// Whether an input is waiting for its window to elapse
    pub fn is_pending(&self) -> bool {
        self.local != self.debounced
    }

    /// Record a keystroke; any earlier ticket becomes stale
    pub fn input(&mut self, value: impl Into<String>) -> Ticket {
        self.local = value.into();
        self.phase = InteractionPhase::UserEditing;
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Debounce timer for `ticket` fired.
    ///
    /// Returns the value to commit when the ticket is the latest one and the
    /// settled value differs from the last value sent. The reference is
    /// updated as the commit is issued.
    pub fn settle(&mut self, ticket: Ticket) -> Option<String> {
        if ticket.0 != self.generation {
            return None;
        }
        self.debounced = self.local.clone();
        if self.phase != InteractionPhase::UserEditing || self.debounced == self.last_sent {
            return None;
        }
        self.last_sent = self.debounced.clone();
        Some(self.last_sent.clone())
    }

    /// Server value arrived (initial load or refetch).
    ///
    /// Updates the reference so the echo never triggers a write. An edit still
    /// waiting for its window keeps the local value.
    pub fn refresh(&mut self, server_value: &str) {
        self.last_sent = server_value.to_string();
        if !self.is_pending() {
            self.local = server_value.to_string();
            self.debounced = server_value.to_string();
        }
        if self.phase == InteractionPhase::Idle {
            self.phase = InteractionPhase::Loaded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_commits_once_with_final_value() {
        let mut field = FieldAutosave::loaded("");
        let tickets = vec![field.input("a"), field.input("ab"), field.input("abc")];

        let commits: Vec<String> = tickets.into_iter().filter_map(|t| field.settle(t)).collect();
        assert_eq!(commits, vec!["abc".to_string()]);
        assert_eq!(field.last_sent(), "abc");
        assert_eq!(field.debounced(), "abc");
    }

    #[test]
    fn test_stale_ticket_fired_late_does_not_commit() {
        let mut field = FieldAutosave::loaded("x");
        let first = field.input("xy");
        let second = field.input("xyz");
        assert_eq!(field.settle(second), Some("xyz".to_string()));
        assert_eq!(field.settle(first), None);
    }

    #[test]
    fn test_typing_back_to_sent_value_skips_write() {
        let mut field = FieldAutosave::loaded("roof ok");
        field.input("roof o");
        let ticket = field.input("roof ok");
        assert_eq!(field.settle(ticket), None);
    }

    #[test]
    fn test_server_echo_does_not_trigger_write() {
        let mut field = FieldAutosave::loaded("a");
        let ticket = field.input("ab");
        assert_eq!(field.settle(ticket), Some("ab".to_string()));

        // refetch returns what we just wrote
        field.refresh("ab");
        assert_eq!(field.local(), "ab");
        assert!(!field.is_pending());
    }

    #[test]
    fn test_refresh_keeps_pending_edit() {
        let mut field = FieldAutosave::loaded("old");
        let ticket = field.input("mine");
        field.refresh("theirs");
        assert_eq!(field.local(), "mine");
        assert_eq!(field.settle(ticket), Some("mine".to_string()));
    }

    #[test]
    fn test_phase_transitions() {
        let mut field = FieldAutosave::new();
        assert_eq!(field.phase(), InteractionPhase::Idle);
        field.refresh("v");
        assert_eq!(field.phase(), InteractionPhase::Loaded);
        field.input("vv");
        assert_eq!(field.phase(), InteractionPhase::UserEditing);
        field.refresh("w");
        assert_eq!(field.phase(), InteractionPhase::UserEditing);
    }
}
