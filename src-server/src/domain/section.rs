//! Section Entity
//!
//! Top-level grouping of a company's inspection template.

use serde::{Deserialize, Serialize};

use reorder_core::Orderable;

use super::entity::{new_id, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    /// Owning company (ordering scope)
    pub company_id: String,
    pub name: String,
    /// 1-based position among the company's active sections
    pub order_index: u32,
    pub deleted_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Section {
    pub fn new(company_id: &str, name: String) -> Self {
        Self {
            id: new_id(),
            company_id: company_id.to_string(),
            name,
            order_index: 0,
            deleted_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Section {
    fn id(&self) -> &str {
        &self.id
    }

    fn deleted_at(&self) -> Option<i64> {
        self.deleted_at
    }
}

impl Orderable for Section {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_serializes_camel_case() {
        let mut section = Section::new("acme", "Exterior".to_string());
        section.order_index = 2;
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["companyId"], "acme");
        assert_eq!(json["orderIndex"], 2);
        assert!(json["deletedAt"].is_null());
        assert!(!section.is_deleted());
    }
}
