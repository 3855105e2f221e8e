//! Orderable Items
//!
//! Sections, subsections and checklists all live in ordered sibling lists.
//! Checklists additionally carry a discriminator splitting their scope into
//! two independently ordered groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checklist discriminator group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistKind {
    /// Condition checks (satisfactory / marginal / defective ...)
    #[default]
    Status,
    /// Free-form information fields
    Information,
}

impl ChecklistKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistKind::Status => "status",
            ChecklistKind::Information => "information",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "status" => Some(ChecklistKind::Status),
            "information" => Some(ChecklistKind::Information),
            _ => None,
        }
    }

    /// The group sharing the scope with this one
    pub fn other(&self) -> Self {
        match self {
            ChecklistKind::Status => ChecklistKind::Information,
            ChecklistKind::Information => ChecklistKind::Status,
        }
    }
}

impl fmt::Display for ChecklistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item living in an ordered sibling list
pub trait Orderable {
    /// Opaque, stable identifier
    fn item_id(&self) -> &str;

    /// 1-based position within the sibling group
    fn order_index(&self) -> u32;

    fn set_order_index(&mut self, order: u32);

    /// Discriminator group, `None` for items without one
    fn kind(&self) -> Option<ChecklistKind> {
        None
    }

    /// Soft-deleted items are excluded from ordering
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Parent grouping under which an ordered list of siblings exists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", content = "id", rename_all = "lowercase")]
pub enum ScopeKey {
    /// Sections of a company
    Company(String),
    /// Subsections of a section
    Section(String),
    /// Checklists of a subsection
    Subsection(String),
}

impl ScopeKey {
    pub fn id(&self) -> &str {
        match self {
            ScopeKey::Company(id) | ScopeKey::Section(id) | ScopeKey::Subsection(id) => id,
        }
    }

    pub fn level(&self) -> &'static str {
        match self {
            ScopeKey::Company(_) => "company",
            ScopeKey::Section(_) => "section",
            ScopeKey::Subsection(_) => "subsection",
        }
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_and_other() {
        assert_eq!(ChecklistKind::parse("information"), Some(ChecklistKind::Information));
        assert_eq!(ChecklistKind::parse("bogus"), None);
        assert_eq!(ChecklistKind::Status.other(), ChecklistKind::Information);
        assert_eq!(ChecklistKind::Information.to_string(), "information");
    }

    #[test]
    fn test_scope_key_display() {
        let scope = ScopeKey::Subsection("sub-1".to_string());
        assert_eq!(scope.to_string(), "subsection:sub-1");
        assert_eq!(scope.id(), "sub-1");
        assert_eq!(ScopeKey::Company("c".into()).level(), "company");
    }
}
