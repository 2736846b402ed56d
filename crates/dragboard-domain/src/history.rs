//! Undo/redo history for board arrangements.
//!
//! Snapshot-based: before each transition that changes the board, the
//! previous `BoardState` is pushed onto the undo stack.

use crate::BoardState;
use std::collections::VecDeque;

/// Bounded undo/redo stacks of board snapshots.
#[derive(Debug)]
pub struct HistoryManager<C> {
    /// Most recent snapshot at the back.
    undo_stack: VecDeque<BoardState<C>>,
    redo_stack: VecDeque<BoardState<C>>,
    max_depth: usize,
}

impl<C> HistoryManager<C> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth,
        }
    }

    /// Record the state a transition is about to replace.
    ///
    /// Clears the redo stack: a new move after an undo discards the undone future.
    pub fn capture_before(&mut self, snapshot: BoardState<C>) {
        if self.max_depth == 0 {
            return;
        }
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Step back: returns the snapshot to restore and remembers `current` for redo.
    pub fn undo(&mut self, current: BoardState<C>) -> Result<BoardState<C>, BoardState<C>> {
        match self.undo_stack.pop_back() {
            Some(previous) => {
                self.redo_stack.push_back(current);
                Ok(previous)
            }
            None => Err(current),
        }
    }

    /// Step forward: returns the snapshot to restore and remembers `current` for undo.
    pub fn redo(&mut self, current: BoardState<C>) -> Result<BoardState<C>, BoardState<C>> {
        match self.redo_stack.pop_back() {
            Some(next) => {
                self.undo_stack.push_back(current);
                Ok(next)
            }
            None => Err(current),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all history (called when the board is replaced wholesale).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

impl<C> Default for HistoryManager<C> {
    fn default() -> Self {
        Self::new(dragboard_core::config::DEFAULT_HISTORY_DEPTH)
    }
}
