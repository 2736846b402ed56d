use std::fmt::Debug;
use std::hash::Hash;

/// Capability every card placed on a board must provide.
///
/// The board never inspects card contents beyond this identifier; it only
/// moves values between and within columns.
pub trait CardItem {
    type Id: Clone + Eq + Hash + Debug;

    /// Stable identifier, unique across the whole board.
    fn card_id(&self) -> Self::Id;
}
