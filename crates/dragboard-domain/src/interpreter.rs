//! Drag result interpreter.
//!
//! A pure reducer from `(board, drag)` to `(board, transition)`. It performs
//! no I/O and trusts the drag report: indices and column keys are expected
//! to come from the gesture library. Use [`BoardState::validate_drag`] first
//! when that is not the case.

use crate::board_state::BoardState;
use crate::change::{ChangePayload, Transition};
use crate::drag::{DragKind, DragLocation, DragResult, DropOptions};
use dragboard_core::{reorder, CardItem};

/// Apply a drag gesture to `state`.
///
/// Card moves yield a [`ChangePayload`]; column moves only rearrange the
/// column order and are never reported for persistence.
///
/// # Panics
///
/// Panics if the drag names a column that is not on the board, or an index
/// outside the named column.
pub fn interpret<C: CardItem + Clone>(
    mut state: BoardState<C>,
    drag: &DragResult,
    options: DropOptions,
) -> (BoardState<C>, Transition<C>) {
    let Some(destination) = drag.destination.as_ref() else {
        return (state, Transition::Cancelled);
    };
    if options.ignore_drop {
        return (state, Transition::Cancelled);
    }
    if drag.is_noop() {
        return (state, Transition::Unchanged);
    }

    let transition = match drag.kind {
        DragKind::Column => {
            let order = reorder(state.column_order(), drag.source.index, destination.index);
            state.set_column_order(order);
            Transition::ColumnReordered {
                from: drag.source.index,
                to: destination.index,
            }
        }
        DragKind::Card if drag.source.column_id == destination.column_id => {
            Transition::CardReorderedWithinColumn(reorder_within(
                &mut state,
                &drag.source,
                destination,
            ))
        }
        DragKind::Card => Transition::CardMovedAcrossColumns(move_across(
            &mut state,
            &drag.source,
            destination,
        )),
    };
    (state, transition)
}

fn reorder_within<C: Clone>(
    state: &mut BoardState<C>,
    source: &DragLocation,
    destination: &DragLocation,
) -> ChangePayload<C> {
    let before = state.content[source.column_id.as_str()].clone();
    // Taken from the pre-move list, at the index the drag started from.
    let card = before[source.index].clone();
    let after = reorder(&before, source.index, destination.index);
    state.set_cards(&source.column_id, after.clone());

    ChangePayload {
        card,
        destination_column_id: destination.column_id.clone(),
        original_column_id: None,
        destination_index: destination.index,
        before_reordered_list: before,
        reordered_list: after,
    }
}

fn move_across<C: Clone>(
    state: &mut BoardState<C>,
    source: &DragLocation,
    destination: &DragLocation,
) -> ChangePayload<C> {
    let mut origin = state.content[source.column_id.as_str()].clone();
    let card = origin.remove(source.index);

    let before = state.content[destination.column_id.as_str()].clone();
    let mut after = before.clone();
    after.insert(destination.index, card.clone());

    state.set_cards(&source.column_id, origin);
    state.set_cards(&destination.column_id, after.clone());

    ChangePayload {
        card,
        destination_column_id: destination.column_id.clone(),
        original_column_id: Some(source.column_id.clone()),
        destination_index: destination.index,
        before_reordered_list: before,
        reordered_list: after,
    }
}
