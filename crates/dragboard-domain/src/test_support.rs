use crate::{BoardState, ColumnSpec};
use dragboard_core::CardItem;

/// Minimal card keyed by a static label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticky(pub &'static str);

impl CardItem for Sticky {
    type Id = &'static str;

    fn card_id(&self) -> Self::Id {
        self.0
    }
}

pub fn stickies(names: &[&'static str]) -> Vec<Sticky> {
    names.iter().copied().map(Sticky).collect()
}

pub fn labels(cards: &[Sticky]) -> Vec<&'static str> {
    cards.iter().map(|c| c.0).collect()
}

/// Board with `todo: [A, B, C]`, `doing: []`, `done: [X, Y]`.
pub fn sample_board() -> BoardState<Sticky> {
    BoardState::from_columns(vec![
        ColumnSpec::new("todo", "To Do", stickies(&["A", "B", "C"])),
        ColumnSpec::empty("doing", "Doing"),
        ColumnSpec::new("done", "Done", stickies(&["X", "Y"])),
    ])
}
