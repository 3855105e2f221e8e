//! Sequence Operations
//!
//! Array move and dense 1-based resequencing of sibling lists.

use crate::item::Orderable;

/// Move the element at `old_index` to `new_index`.
///
/// Elements between the two positions shift by one slot; nothing else moves.
/// Out-of-range indices leave the list untouched.
pub fn array_move<T>(items: &mut Vec<T>, old_index: usize, new_index: usize) {
    if old_index == new_index || old_index >= items.len() || new_index >= items.len() {
        return;
    }
    let item = items.remove(old_index);
    items.insert(new_index, item);
}

/// Linear scan for an item's position
pub fn position_of<T: Orderable>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.item_id() == id)
}

/// Assign `order_index = position + 1` to every element
pub fn resequence<T: Orderable>(items: &mut [T]) {
    for (pos, item) in items.iter_mut().enumerate() {
        item.set_order_index(pos as u32 + 1);
    }
}

/// Active (non-deleted) items sorted by current order, ties broken by id
pub fn sorted_active<T: Orderable + Clone>(items: &[T]) -> Vec<T> {
    let mut active: Vec<T> = items.iter().filter(|i| !i.is_deleted()).cloned().collect();
    active.sort_by(|a, b| {
        a.order_index()
            .cmp(&b.order_index())
            .then_with(|| a.item_id().cmp(b.item_id()))
    });
    active
}

/// Next order index for a new or restored item: `max(order_index) + 1` over active items
pub fn next_order_index<T: Orderable>(items: &[T]) -> u32 {
    items
        .iter()
        .filter(|i| !i.is_deleted())
        .map(|i| i.order_index())
        .max()
        .unwrap_or(0)
        + 1
}

/// Whether active order indices form exactly `1..=n`
pub fn is_dense<T: Orderable>(items: &[T]) -> bool {
    let mut orders: Vec<u32> = items
        .iter()
        .filter(|i| !i.is_deleted())
        .map(|i| i.order_index())
        .collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(pos, order)| *order == pos as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, item};

    #[test]
    fn test_array_move_forward_and_back() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        array_move(&mut v, 1, 3);
        assert_eq!(v, vec!['a', 'c', 'd', 'b', 'e']);
        array_move(&mut v, 3, 0);
        assert_eq!(v, vec!['b', 'a', 'c', 'd', 'e']);
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let mut v = vec![1, 2, 3];
        array_move(&mut v, 0, 3);
        array_move(&mut v, 5, 0);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_array_move_is_permutation_preserving_relative_order() {
        let original: Vec<u32> = (0..6).collect();
        for old in 0..original.len() {
            for new in 0..original.len() {
                let mut moved = original.clone();
                array_move(&mut moved, old, new);

                assert_eq!(moved[new], original[old]);
                let mut sorted = moved.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, original);

                let rest_before: Vec<u32> = original.iter().copied().filter(|x| *x != original[old]).collect();
                let rest_after: Vec<u32> = moved.iter().copied().filter(|x| *x != original[old]).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn test_resequence_and_density() {
        let mut items = vec![item("a", 4), item("b", 9), item("c", 2)];
        assert!(!is_dense(&items));
        resequence(&mut items);
        assert_eq!(items.iter().map(|i| i.order).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(is_dense(&items));
    }

    #[test]
    fn test_sorted_active_skips_deleted() {
        let mut gone = item("x", 1);
        gone.deleted = true;
        let items = vec![item("c", 3), gone, item("a", 2)];
        assert_eq!(ids(&sorted_active(&items)), vec!["a", "c"]);
        assert_eq!(next_order_index(&items), 4);
        assert_eq!(position_of(&items, "a"), Some(2));
        assert_eq!(position_of(&items, "zz"), None);
    }

    #[test]
    fn test_next_order_index_empty() {
        let items: Vec<crate::testing::TestItem> = Vec::new();
        assert_eq!(next_order_index(&items), 1);
    }
}
