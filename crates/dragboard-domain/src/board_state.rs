//! In-memory arrangement of a board.
//!
//! `BoardState` is a passive container: the interpreter is the only code
//! that rearranges it. `validate` and `validate_drag` exist for callers that
//! load boards or drag reports from untrusted sources.

use crate::column::ColumnSpec;
use crate::drag::{DragKind, DragResult};
use dragboard_core::{BoardError, BoardResult, CardItem};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState<C> {
    column_order: Vec<String>,
    titles: HashMap<String, String>,
    pub(crate) content: HashMap<String, Vec<C>>,
}

/// Borrowed view of one column, in board order.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRef<'a, C> {
    pub key: &'a str,
    pub title: &'a str,
    pub cards: &'a [C],
}

impl<C> Default for BoardState<C> {
    fn default() -> Self {
        Self {
            column_order: Vec::new(),
            titles: HashMap::new(),
            content: HashMap::new(),
        }
    }
}

impl<C> BoardState<C> {
    /// Build a board whose column order is the order of `columns`.
    pub fn from_columns(columns: Vec<ColumnSpec<C>>) -> Self {
        let mut state = Self::default();
        for column in columns {
            state.column_order.push(column.key.clone());
            state.titles.insert(column.key.clone(), column.title);
            state.content.insert(column.key, column.data);
        }
        state
    }

    pub fn cards(&self, key: &str) -> Option<&[C]> {
        self.content.get(key).map(Vec::as_slice)
    }

    pub fn title(&self, key: &str) -> Option<&str> {
        self.titles.get(key).map(String::as_str)
    }

    pub fn column_order(&self) -> &[String] {
        &self.column_order
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.content.contains_key(key)
    }

    pub fn card_count(&self) -> usize {
        self.content.values().map(Vec::len).sum()
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnRef<'_, C>> {
        self.column_order.iter().filter_map(move |key| {
            let cards = self.content.get(key)?;
            Some(ColumnRef {
                key,
                title: self.titles.get(key).map(String::as_str).unwrap_or(key),
                cards,
            })
        })
    }

    /// Hand the board back as column specs, in column order.
    pub fn into_columns(mut self) -> Vec<ColumnSpec<C>> {
        self.column_order
            .into_iter()
            .map(|key| {
                let data = self.content.remove(&key).unwrap_or_default();
                let title = self.titles.remove(&key).unwrap_or_else(|| key.clone());
                ColumnSpec { key, title, data }
            })
            .collect()
    }

    /// Clone the board out as column specs, in column order.
    pub fn to_columns(&self) -> Vec<ColumnSpec<C>>
    where
        C: Clone,
    {
        self.columns()
            .map(|column| ColumnSpec::new(column.key, column.title, column.cards.to_vec()))
            .collect()
    }

    /// Append a card to the end of a column.
    pub fn push_card(&mut self, key: &str, card: C) -> BoardResult<usize> {
        let cards = self
            .content
            .get_mut(key)
            .ok_or_else(|| BoardError::NotFound(format!("column `{}`", key)))?;
        cards.push(card);
        Ok(cards.len() - 1)
    }

    pub(crate) fn set_cards(&mut self, key: &str, cards: Vec<C>) {
        self.content.insert(key.to_string(), cards);
    }

    pub(crate) fn set_column_order(&mut self, order: Vec<String>) {
        self.column_order = order;
    }

    /// Check that a drag report only names columns and indices that exist.
    pub fn validate_drag(&self, drag: &DragResult) -> BoardResult<()> {
        let Some(destination) = &drag.destination else {
            return Ok(());
        };

        match drag.kind {
            DragKind::Column => {
                let len = self.column_order.len();
                check_index("column", drag.source.index, len)?;
                check_index("column", destination.index, len)?;
            }
            DragKind::Card => {
                let source = self.column_len(&drag.source.column_id)?;
                let target = self.column_len(&destination.column_id)?;
                check_index(&drag.source.column_id, drag.source.index, source)?;
                // A card dropped into another column may land after its last card.
                let bound = if drag.source.column_id == destination.column_id {
                    target
                } else {
                    target + 1
                };
                check_index(&destination.column_id, destination.index, bound)?;
            }
        }
        Ok(())
    }

    /// Refuse a board where a column key equals the board-level drag sentinel.
    /// Such a column would make every card drag out of it classify as a
    /// column reorder.
    pub fn reject_column_key(&self, reserved: &str) -> BoardResult<()> {
        if self.has_column(reserved) {
            return Err(BoardError::Validation(format!(
                "column key `{}` is reserved for column drags",
                reserved
            )));
        }
        Ok(())
    }

    fn column_len(&self, key: &str) -> BoardResult<usize> {
        self.content
            .get(key)
            .map(Vec::len)
            .ok_or_else(|| BoardError::NotFound(format!("column `{}`", key)))
    }
}

impl<C: CardItem> BoardState<C> {
    /// Locate a card by id: its column key and index.
    pub fn find_card(&self, id: &C::Id) -> Option<(&str, usize)> {
        self.column_order.iter().find_map(|key| {
            let index = self
                .content
                .get(key)?
                .iter()
                .position(|card| &card.card_id() == id)?;
            Some((key.as_str(), index))
        })
    }

    /// Mutable access to a card's own fields. Its place on the board is unchanged.
    pub fn card_mut(&mut self, id: &C::Id) -> Option<&mut C> {
        self.content
            .values_mut()
            .flat_map(|cards| cards.iter_mut())
            .find(|card| &card.card_id() == id)
    }

    /// Check the board invariants: column keys are unique, the order and
    /// the content map agree, and no card appears twice.
    pub fn validate(&self) -> BoardResult<()> {
        let mut seen_keys = HashSet::new();
        for key in &self.column_order {
            if !seen_keys.insert(key.as_str()) {
                return Err(BoardError::Validation(format!(
                    "duplicate column key `{}`",
                    key
                )));
            }
            if !self.content.contains_key(key) {
                return Err(BoardError::Validation(format!(
                    "column `{}` has no card list",
                    key
                )));
            }
        }
        if let Some(orphan) = self.content.keys().find(|k| !seen_keys.contains(k.as_str())) {
            return Err(BoardError::Validation(format!(
                "card list `{}` is not in the column order",
                orphan
            )));
        }

        let mut seen_cards = HashSet::new();
        for (key, cards) in &self.content {
            for card in cards {
                let id = card.card_id();
                if !seen_cards.insert(id.clone()) {
                    return Err(BoardError::Validation(format!(
                        "card {:?} appears more than once (again in `{}`)",
                        id, key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_index(what: &str, index: usize, len: usize) -> BoardResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(BoardError::Validation(format!(
            "index {} is out of range for `{}` ({} slots)",
            index, what, len
        )))
    }
}
