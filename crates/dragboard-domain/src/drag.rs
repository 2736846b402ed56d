//! Drag gesture descriptors.
//!
//! A drag library reports where an item was picked up and where it was
//! dropped. These types carry that report into the interpreter.

use serde::{Deserialize, Serialize};

/// What the user was dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Card,
    Column,
}

/// A droppable container and an index inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// A completed (or cancelled) drag gesture.
///
/// For column drags both locations name the board-level droppable and the
/// indices refer to positions in the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub kind: DragKind,
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragResult {
    pub fn card_move(
        from_column: impl Into<String>,
        from_index: usize,
        to_column: impl Into<String>,
        to_index: usize,
    ) -> Self {
        Self {
            kind: DragKind::Card,
            source: DragLocation::new(from_column, from_index),
            destination: Some(DragLocation::new(to_column, to_index)),
        }
    }

    pub fn column_move(board_context_id: &str, from_index: usize, to_index: usize) -> Self {
        Self {
            kind: DragKind::Column,
            source: DragLocation::new(board_context_id, from_index),
            destination: Some(DragLocation::new(board_context_id, to_index)),
        }
    }

    /// A gesture that ended outside any droppable.
    pub fn cancelled(kind: DragKind, source: DragLocation) -> Self {
        Self {
            kind,
            source,
            destination: None,
        }
    }

    /// Dropped back where it started. Column drags compare positions only,
    /// since their droppable ids carry no column identity.
    pub fn is_noop(&self) -> bool {
        match (&self.destination, self.kind) {
            (None, _) => false,
            (Some(destination), DragKind::Column) => destination.index == self.source.index,
            (Some(destination), DragKind::Card) => *destination == self.source,
        }
    }
}

/// Drag report as emitted by the gesture library, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDragResult {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl RawDragResult {
    /// Classify by droppable id: a drag that starts in `board_context_id`
    /// moved a column, anything else moved a card.
    pub fn classify(self, board_context_id: &str) -> DragResult {
        let kind = if self.source.column_id == board_context_id {
            DragKind::Column
        } else {
            DragKind::Card
        };
        DragResult {
            kind,
            source: self.source,
            destination: self.destination,
        }
    }
}

/// Caller-controlled switches for a single drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropOptions {
    /// Treat every drop as cancelled.
    pub ignore_drop: bool,
}
