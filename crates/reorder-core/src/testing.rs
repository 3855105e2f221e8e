//! Test fixtures shared by unit tests.

use crate::item::{ChecklistKind, Orderable};

#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub id: String,
    pub order: u32,
    pub kind: Option<ChecklistKind>,
    pub deleted: bool,
}

impl Orderable for TestItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn order_index(&self) -> u32 {
        self.order
    }

    fn set_order_index(&mut self, order: u32) {
        self.order = order;
    }

    fn kind(&self) -> Option<ChecklistKind> {
        self.kind
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

pub fn item(id: &str, order: u32) -> TestItem {
    TestItem {
        id: id.to_string(),
        order,
        kind: None,
        deleted: false,
    }
}

pub fn checklist(id: &str, order: u32, kind: ChecklistKind) -> TestItem {
    TestItem {
        kind: Some(kind),
        ..item(id, order)
    }
}

pub fn ids(items: &[TestItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}
