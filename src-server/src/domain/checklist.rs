//! Checklist Entity
//!
//! A checklist item inside a subsection. Status and information checklists
//! are ordered independently but share the subsection's order space
//! (status first).

use serde::{Deserialize, Serialize};

use reorder_core::{ChecklistKind, FieldPatch, Orderable};

use super::entity::{new_id, validate_name, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    /// Parent subsection (ordering scope)
    pub subsection_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChecklistKind,
    pub comment: Option<String>,
    pub location: Option<String>,
    /// Free-form answer (numeric, range or text depending on the item)
    pub answer: Option<String>,
    pub order_index: u32,
    pub deleted_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Checklist {
    pub fn new(subsection_id: &str, name: String, kind: ChecklistKind) -> Self {
        Self {
            id: new_id(),
            subsection_id: subsection_id.to_string(),
            name,
            kind,
            comment: None,
            location: None,
            answer: None,
            order_index: 0,
            deleted_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Apply a partial update; empty strings clear optional fields
    pub fn apply_patch(&mut self, patch: &FieldPatch) -> DomainResult<()> {
        if let Some(name) = &patch.name {
            self.name = validate_name(name)?;
        }
        if let Some(comment) = &patch.comment {
            self.comment = non_empty(comment);
        }
        if let Some(location) = &patch.location {
            self.location = non_empty(location);
        }
        if let Some(answer) = &patch.answer {
            self.answer = non_empty(answer);
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Entity for Checklist {
    fn id(&self) -> &str {
        &self.id
    }

    fn deleted_at(&self) -> Option<i64> {
        self.deleted_at
    }
}

impl Orderable for Checklist {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn order_index(&self) -> u32 {
        self.order_index
    }

    fn set_order_index(&mut self, order: u32) {
        self.order_index = order;
    }

    fn kind(&self) -> Option<ChecklistKind> {
        Some(self.kind)
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patch() {
        let mut checklist = Checklist::new("sub", "Shingles".to_string(), ChecklistKind::Status);
        let patch = FieldPatch {
            comment: Some("curling at ridge".into()),
            location: Some(String::new()),
            ..Default::default()
        };
        checklist.location = Some("north slope".into());
        checklist.apply_patch(&patch).unwrap();

        assert_eq!(checklist.comment.as_deref(), Some("curling at ridge"));
        assert_eq!(checklist.location, None);
        assert_eq!(checklist.name, "Shingles");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut checklist = Checklist::new("sub", "Flashing".to_string(), ChecklistKind::Status);
        let patch = FieldPatch {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(checklist.apply_patch(&patch).is_err());
    }

    #[test]
    fn test_kind_serialized_as_type() {
        let checklist = Checklist::new("sub", "Roof age".to_string(), ChecklistKind::Information);
        let json = serde_json::to_value(&checklist).unwrap();
        assert_eq!(json["type"], "information");
        assert_eq!(json["subsectionId"], "sub");
    }
}
