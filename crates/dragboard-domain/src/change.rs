use dragboard_core::CardItem;
use serde::{Deserialize, Serialize};

/// Description of a card move, handed to callers for persistence.
///
/// `before_reordered_list` and `reordered_list` are the destination column
/// before and after the move, so callers can diff them (for example to
/// derive a sort key) without rebuilding board state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePayload<C> {
    pub card: C,
    pub destination_column_id: String,
    /// Set only when the card left another column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_column_id: Option<String>,
    pub destination_index: usize,
    pub before_reordered_list: Vec<C>,
    pub reordered_list: Vec<C>,
}

impl<C> ChangePayload<C> {
    pub fn is_cross_column(&self) -> bool {
        self.original_column_id.is_some()
    }

    /// Neighbours of the moved card in the destination column after the move.
    pub fn neighbours(&self) -> (Option<&C>, Option<&C>) {
        let before = self
            .destination_index
            .checked_sub(1)
            .and_then(|i| self.reordered_list.get(i));
        let after = self.reordered_list.get(self.destination_index + 1);
        (before, after)
    }
}

/// Outcome of interpreting one drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition<C> {
    /// No destination, or the caller asked to ignore the drop.
    Cancelled,
    /// Dropped back where it started.
    Unchanged,
    ColumnReordered { from: usize, to: usize },
    CardReorderedWithinColumn(ChangePayload<C>),
    CardMovedAcrossColumns(ChangePayload<C>),
}

impl<C> Transition<C> {
    pub fn payload(&self) -> Option<&ChangePayload<C>> {
        match self {
            Self::CardReorderedWithinColumn(payload) | Self::CardMovedAcrossColumns(payload) => {
                Some(payload)
            }
            _ => None,
        }
    }

    pub fn into_payload(self) -> Option<ChangePayload<C>> {
        match self {
            Self::CardReorderedWithinColumn(payload) | Self::CardMovedAcrossColumns(payload) => {
                Some(payload)
            }
            _ => None,
        }
    }

    pub fn changes_state(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::Unchanged)
    }
}

impl<C: CardItem> Transition<C> {
    pub fn describe(&self) -> String {
        match self {
            Self::Cancelled => "Drop cancelled".to_string(),
            Self::Unchanged => "Dropped in place".to_string(),
            Self::ColumnReordered { from, to } => {
                format!("Moved column from position {} to {}", from, to)
            }
            Self::CardReorderedWithinColumn(p) => format!(
                "Reordered card {:?} in `{}` to position {}",
                p.card.card_id(),
                p.destination_column_id,
                p.destination_index
            ),
            Self::CardMovedAcrossColumns(p) => format!(
                "Moved card {:?} from `{}` to `{}` at position {}",
                p.card.card_id(),
                p.original_column_id.as_deref().unwrap_or("?"),
                p.destination_column_id,
                p.destination_index
            ),
        }
    }
}
