//! Resequencing Payloads
//!
//! A reorder is persisted as one flat list of `{id, order}` pairs covering
//! every active item in the scope. Checklist scopes hold two discriminator
//! groups sharing one order space: status items always come first
//! (`1..=M`), information items after (`M+1..=M+K`), whichever group was
//! dragged.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::PayloadError;
use crate::item::{ChecklistKind, Orderable};
use crate::sequence::sorted_active;

/// Explicit order index for one item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderEntry {
    pub id: String,
    pub order: u32,
}

impl OrderEntry {
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self { id: id.into(), order }
    }
}

/// Payload for a single-group scope, items already in their new order
pub fn build_payload<T: Orderable>(items: &[T]) -> Vec<OrderEntry> {
    items
        .iter()
        .enumerate()
        .map(|(pos, item)| OrderEntry::new(item.item_id(), pos as u32 + 1))
        .collect()
}

/// Canonical shared order space: status group first, information group after
pub fn canonical<T: Orderable>(status: &[T], information: &[T]) -> Vec<OrderEntry> {
    status
        .iter()
        .chain(information.iter())
        .enumerate()
        .map(|(pos, item)| OrderEntry::new(item.item_id(), pos as u32 + 1))
        .collect()
}

/// Payload after one discriminator group was reordered.
///
/// `reordered` is the dragged group in its new order; `other` is the untouched
/// group, which keeps its relative order (sorted by current `order_index`).
pub fn build_grouped_payload<T: Orderable + Clone>(
    dragged: ChecklistKind,
    reordered: &[T],
    other: &[T],
) -> Vec<OrderEntry> {
    let other_sorted = sorted_active(other);
    match dragged {
        ChecklistKind::Status => canonical(reordered, &other_sorted),
        ChecklistKind::Information => canonical(&other_sorted, reordered),
    }
}

/// Full scope ordering after appending `new_id` at the end of its group.
///
/// Used when a checklist is created or restored: appending to the status
/// group pushes the information group up by one so the shared space stays
/// dense.
pub fn append_to_group<T: Orderable + Clone>(active: &[T], new_id: &str, kind: ChecklistKind) -> Vec<OrderEntry> {
    let sorted = sorted_active(active);
    let group_ids = |wanted: ChecklistKind| -> Vec<String> {
        sorted
            .iter()
            .filter(|i| i.item_id() != new_id)
            .filter(|i| i.kind().unwrap_or_default() == wanted)
            .map(|i| i.item_id().to_string())
            .collect()
    };

    let mut status = group_ids(ChecklistKind::Status);
    let mut information = group_ids(ChecklistKind::Information);
    match kind {
        ChecklistKind::Status => status.push(new_id.to_string()),
        ChecklistKind::Information => information.push(new_id.to_string()),
    }

    status
        .into_iter()
        .chain(information)
        .enumerate()
        .map(|(pos, id)| OrderEntry::new(id, pos as u32 + 1))
        .collect()
}

/// Check that a payload names every active id exactly once with dense orders `1..=n`
pub fn validate_payload<'a, I>(active_ids: I, entries: &[OrderEntry]) -> Result<(), PayloadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let active: Vec<&str> = active_ids.into_iter().collect();
    let active_set: HashSet<&str> = active.iter().copied().collect();

    let mut seen = HashSet::new();
    for entry in entries {
        if !active_set.contains(entry.id.as_str()) {
            return Err(PayloadError::Unknown(entry.id.clone()));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(PayloadError::Duplicate(entry.id.clone()));
        }
    }

    if let Some(missing) = active.iter().find(|id| !seen.contains(*id)) {
        return Err(PayloadError::Missing((*missing).to_string()));
    }

    let mut orders: Vec<u32> = entries.iter().map(|e| e.order).collect();
    orders.sort_unstable();
    let dense = orders.iter().enumerate().all(|(pos, order)| *order == pos as u32 + 1);
    if !dense {
        return Err(PayloadError::NotDense { expected: entries.len() });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{checklist, item};
    use ChecklistKind::{Information, Status};

    fn pairs(entries: &[OrderEntry]) -> Vec<(&str, u32)> {
        entries.iter().map(|e| (e.id.as_str(), e.order)).collect()
    }

    #[test]
    fn test_build_payload_single_group() {
        let items = vec![item("C", 3), item("A", 1), item("B", 2)];
        assert_eq!(pairs(&build_payload(&items)), vec![("C", 1), ("A", 2), ("B", 3)]);
    }

    #[test]
    fn test_information_reorder_offsets_after_status() {
        let status = vec![checklist("S1", 1, Status), checklist("S2", 2, Status)];
        let info_reordered = vec![checklist("I2", 1, Information), checklist("I1", 2, Information)];

        let payload = build_grouped_payload(Information, &info_reordered, &status);
        assert_eq!(pairs(&payload), vec![("S1", 1), ("S2", 2), ("I2", 3), ("I1", 4)]);
    }

    #[test]
    fn test_status_reorder_keeps_information_relative_order() {
        // information group listed out of order on purpose; it must be sorted by its current index
        let info = vec![checklist("I2", 4, Information), checklist("I1", 3, Information)];
        let status_reordered = vec![checklist("S2", 1, Status), checklist("S1", 2, Status)];

        let payload = build_grouped_payload(Status, &status_reordered, &info);
        assert_eq!(pairs(&payload), vec![("S2", 1), ("S1", 2), ("I1", 3), ("I2", 4)]);
    }

    #[test]
    fn test_grouped_payload_skips_deleted_items() {
        let mut gone = checklist("I9", 5, Information);
        gone.deleted = true;
        let info = vec![checklist("I1", 3, Information), gone];
        let status_reordered = vec![checklist("S1", 1, Status)];

        let payload = build_grouped_payload(Status, &status_reordered, &info);
        assert_eq!(pairs(&payload), vec![("S1", 1), ("I1", 2)]);
    }

    #[test]
    fn test_append_to_status_group_shifts_information() {
        let active = vec![
            checklist("S1", 1, Status),
            checklist("S2", 2, Status),
            checklist("I1", 3, Information),
        ];
        let payload = append_to_group(&active, "S3", Status);
        assert_eq!(pairs(&payload), vec![("S1", 1), ("S2", 2), ("S3", 3), ("I1", 4)]);

        let payload = append_to_group(&active, "I2", Information);
        assert_eq!(pairs(&payload), vec![("S1", 1), ("S2", 2), ("I1", 3), ("I2", 4)]);
    }

    #[test]
    fn test_validate_payload_accepts_exact_cover() {
        let entries = vec![OrderEntry::new("b", 1), OrderEntry::new("a", 2)];
        assert_eq!(validate_payload(["a", "b"], &entries), Ok(()));
        assert_eq!(validate_payload(Vec::<&str>::new(), &[]), Ok(()));
    }

    #[test]
    fn test_validate_payload_rejections() {
        let missing = vec![OrderEntry::new("a", 1)];
        assert_eq!(validate_payload(["a", "b"], &missing), Err(PayloadError::Missing("b".into())));

        let duplicate = vec![OrderEntry::new("a", 1), OrderEntry::new("a", 2)];
        assert_eq!(validate_payload(["a", "b"], &duplicate), Err(PayloadError::Duplicate("a".into())));

        let unknown = vec![OrderEntry::new("a", 1), OrderEntry::new("zz", 2)];
        assert_eq!(validate_payload(["a", "b"], &unknown), Err(PayloadError::Unknown("zz".into())));

        let gapped = vec![OrderEntry::new("a", 1), OrderEntry::new("b", 3)];
        assert_eq!(validate_payload(["a", "b"], &gapped), Err(PayloadError::NotDense { expected: 2 }));
    }
}
