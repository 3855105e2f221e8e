//! Subsection Entity

use serde::{Deserialize, Serialize};

use reorder_core::Orderable;

use super::entity::{new_id, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub id: String,
    /// Parent section (ordering scope)
    pub section_id: String,
    pub name: String,
    pub order_index: u32,
    pub deleted_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Subsection {
    pub fn new(section_id: &str, name: String) -> Self {
        Self {
            id: new_id(),
            section_id: section_id.to_string(),
            name,
            order_index: 0,
            deleted_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Subsection {
    fn id(&self) -> &str {
        &self.id
    }

    fn deleted_at(&self) -> Option<i64> {
        self.deleted_at
    }
}

impl Orderable for Subsection {
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
