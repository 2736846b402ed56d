//! Fractional sort keys derived from change payloads.
//!
//! Persisting a move only needs a new key for the moved card: one that sorts
//! between its new neighbours. Other cards keep their keys.

use crate::change::ChangePayload;
use dragboard_core::CardItem;

/// Cards that carry a numeric sort key within their column.
pub trait Positioned: CardItem {
    fn position(&self) -> f64;
    fn set_position(&mut self, position: f64);
}

/// A key that sorts strictly between `before` and `after`.
///
/// With one neighbour missing the key steps one unit past the other; with
/// both missing (an otherwise empty column) it is `0.0`.
pub fn sort_key_between(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(b), Some(a)) => b + (a - b) / 2.0,
        (Some(b), None) => b + 1.0,
        (None, Some(a)) => a - 1.0,
        (None, None) => 0.0,
    }
}

impl<C: Positioned> ChangePayload<C> {
    /// New sort key for the moved card, from its neighbours in `reordered_list`.
    pub fn sort_key(&self) -> f64 {
        let (before, after) = self.neighbours();
        sort_key_between(before.map(C::position), after.map(C::position))
    }
}

/// Rewrite keys in a column to be sequential (0, 1, 2, ...) in list order.
pub fn compact_positions<C: Positioned>(cards: &mut [C]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.set_position(index as f64);
    }
}
