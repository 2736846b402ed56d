//! Array reorder utility.
//!
//! Moves one element of an ordered sequence to a new index. Used for both
//! card order within a column and the board-level column order.

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// Every other element keeps its relative order and the input is left
/// untouched. `to` is interpreted against the sequence after removal, which
/// for a move within one list is the same range as the original.
///
/// # Panics
///
/// Panics if `from` or `to` is not in `0..items.len()`. Indices come from the
/// drag gesture and are trusted.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_last_to_front() {
        assert_eq!(reorder(&["A", "B", "C"], 2, 0), vec!["C", "A", "B"]);
    }

    #[test]
    fn moves_front_to_last() {
        assert_eq!(reorder(&["A", "B", "C"], 0, 2), vec!["B", "C", "A"]);
    }

    #[test]
    fn same_index_is_identity() {
        let items = vec![1, 2, 3, 4];
        for i in 0..items.len() {
            assert_eq!(reorder(&items, i, i), items);
        }
    }

    #[test]
    fn swapping_indices_back_restores_order() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        for i in 0..items.len() {
            for j in 0..items.len() {
                let moved = reorder(&items, i, j);
                assert_eq!(reorder(&moved, j, i), items, "from {} to {}", i, j);
            }
        }
    }

    #[test]
    fn only_permutes() {
        let items = vec![5, 3, 9, 1];
        let mut moved = reorder(&items, 1, 3);
        assert_eq!(moved.len(), items.len());
        moved.sort();
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(moved, sorted);
    }

    #[test]
    fn input_is_not_mutated() {
        let items = vec![1, 2, 3];
        let _ = reorder(&items, 0, 2);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_source_panics() {
        let _ = reorder(&[1, 2], 2, 0);
    }
}
