//! Owner of a live board.
//!
//! `BoardController` runs the interpreter on each drag end, keeps undo
//! history, and forwards card moves to a [`ChangeSink`]. The board is updated
//! optimistically; when the sink rejects a move the previous arrangement is
//! restored and the error is returned.

use crate::{
    interpret, BoardState, ChangeSink, ColumnSpec, DragResult, DropOptions, HistoryManager,
    Transition,
};
use dragboard_core::{AppConfig, BoardResult, CardItem, LogEntry, Loggable};

pub struct BoardController<C, S> {
    state: BoardState<C>,
    sink: S,
    history: HistoryManager<C>,
    options: DropOptions,
    logs: Vec<LogEntry>,
}

impl<C, S> BoardController<C, S>
where
    C: CardItem + Clone + Send + Sync,
    S: ChangeSink<C>,
{
    pub fn new(state: BoardState<C>, sink: S) -> Self {
        Self::with_history(state, sink, HistoryManager::default())
    }

    pub fn with_config(state: BoardState<C>, sink: S, config: &AppConfig) -> Self {
        Self::with_history(
            state,
            sink,
            HistoryManager::new(config.effective_history_depth()),
        )
    }

    fn with_history(state: BoardState<C>, sink: S, history: HistoryManager<C>) -> Self {
        Self {
            state,
            sink,
            history,
            options: DropOptions::default(),
            logs: Vec::new(),
        }
    }

    pub fn state(&self) -> &BoardState<C> {
        &self.state
    }

    pub fn into_state(self) -> BoardState<C> {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn history(&self) -> &HistoryManager<C> {
        &self.history
    }

    /// Edit a card's own fields in place, e.g. to stamp a persisted sort key.
    pub fn card_mut(&mut self, id: &C::Id) -> Option<&mut C> {
        self.state.card_mut(id)
    }

    /// While set, every drop is treated as cancelled.
    pub fn set_ignore_drop(&mut self, ignore: bool) {
        self.options.ignore_drop = ignore;
    }

    pub fn ignores_drop(&self) -> bool {
        self.options.ignore_drop
    }

    /// Handle the end of a drag gesture.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`interpret`]; validate untrusted
    /// drags with [`BoardState::validate_drag`] first.
    pub async fn on_drag_end(&mut self, drag: &DragResult) -> BoardResult<Transition<C>> {
        let previous = self.state.clone();
        let (next, transition) = interpret(std::mem::take(&mut self.state), drag, self.options);
        self.state = next;

        if !transition.changes_state() {
            tracing::debug!("{}", transition.describe());
            return Ok(transition);
        }

        if let Some(change) = transition.payload() {
            if let Err(e) = self.sink.card_moved(change).await {
                tracing::warn!(
                    "Rolling back move of card {:?}: {}",
                    change.card.card_id(),
                    e
                );
                self.state = previous;
                self.add_log(format!("Rolled back: {}", transition.describe()));
                return Err(e);
            }
        }

        self.history.capture_before(previous);
        tracing::debug!("{}", transition.describe());
        self.add_log(transition.describe());
        Ok(transition)
    }

    /// Replace the whole board, e.g. after a server refetch. Clears history.
    pub fn replace_columns(&mut self, columns: Vec<ColumnSpec<C>>) {
        self.state = BoardState::from_columns(columns);
        self.history.clear();
        tracing::debug!(
            "Replaced board with {} columns",
            self.state.column_order().len()
        );
    }

    /// Restore the arrangement before the last move. Local only: the sink is
    /// not told about undone moves.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(std::mem::take(&mut self.state)) {
            Ok(previous) => {
                self.state = previous;
                self.add_log("Undo".to_string());
                true
            }
            Err(current) => {
                self.state = current;
                false
            }
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(std::mem::take(&mut self.state)) {
            Ok(next) => {
                self.state = next;
                self.add_log("Redo".to_string());
                true
            }
            Err(current) => {
                self.state = current;
                false
            }
        }
    }
}

impl<C, S> Loggable for BoardController<C, S> {
    fn add_log(&mut self, message: String) {
        self.logs.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
