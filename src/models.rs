//! Data Models
//!
//! Frontend mirrors of the server's JSON shapes.

use serde::{Deserialize, Serialize};

pub use reorder_core::ChecklistKind;
use reorder_core::Orderable;

/// Anything shown as a named row in a sortable list
pub trait Named {
    fn display_name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub order_index: u32,
    #[serde(default)]
    pub deleted_at: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub id: String,
    pub section_id: String,
    pub name: String,
    pub order_index: u32,
    #[serde(default)]
    pub deleted_at: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub subsection_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChecklistKind,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    pub order_index: u32,
    #[serde(default)]
    pub deleted_at: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SeedReport {
    pub sections: u32,
    pub subsections: u32,
    pub checklists: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeedResponse {
    pub company_id: String,
    pub seeded: SeedReport,
}

/// Error body returned by every failed API call
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
}

macro_rules! orderable {
    ($ty:ty) => {
        impl Orderable for $ty {
            fn item_id(&self) -> &str {
                &self.id
            }

            fn order_index(&self) -> u32 {
                self.order_index
            }

            fn set_order_index(&mut self, order: u32) {
                self.order_index = order;
            }

            fn is_deleted(&self) -> bool {
                self.deleted_at.is_some()
            }
        }

        impl Named for $ty {
            fn display_name(&self) -> &str {
                &self.name
            }
        }
    };
}

orderable!(Section);
orderable!(Subsection);

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

impl Named for Checklist {
    fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_from_server_json() {
        let json = r#"{
            "id": "c1",
            "subsectionId": "ss1",
            "name": "Roof covering",
            "type": "information",
            "comment": null,
            "location": "north slope",
            "answer": null,
            "orderIndex": 3,
            "deletedAt": null,
            "createdAt": 1700000000000,
            "updatedAt": null
        }"#;
        let item: Checklist = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ChecklistKind::Information);
        assert_eq!(item.kind(), Some(ChecklistKind::Information));
        assert_eq!(item.location.as_deref(), Some("north slope"));
        assert!(!item.is_deleted());
    }
}
