use dragboard_core::{AppConfig, BoardError, BoardResult};
use dragboard_domain::{
    BoardController, BoardState, DragResult, Positioned, Task, Transition,
};
use dragboard_persistence::{BoardFileStore, JournalSink};

pub struct CliContext {
    pub controller: BoardController<Task, JournalSink>,
    pub config: AppConfig,
    store: BoardFileStore,
}

impl CliContext {
    pub async fn load(file_path: &str) -> BoardResult<Self> {
        Self::load_with_config(file_path, AppConfig::load()).await
    }

    pub async fn load_with_config(file_path: &str, config: AppConfig) -> BoardResult<Self> {
        let store = BoardFileStore::new(file_path);
        if !store.exists().await {
            return Err(BoardError::NotFound(format!(
                "board file {} (create it with `init`)",
                file_path
            )));
        }

        let state = store.load().await?;
        state.reject_column_key(config.effective_board_context_id())?;
        let controller =
            BoardController::with_config(state, JournalSink::beside(file_path), &config);

        Ok(Self {
            controller,
            config,
            store,
        })
    }

    pub fn state(&self) -> &BoardState<Task> {
        self.controller.state()
    }

    pub fn board_context_id(&self) -> &str {
        self.config.effective_board_context_id()
    }

    /// Apply a drag, stamp the moved card with its new sort key and save.
    ///
    /// If the board cannot be saved the move is undone and its journal line
    /// removed, so the file and the journal never disagree.
    pub async fn apply(&mut self, drag: &DragResult) -> BoardResult<Transition<Task>> {
        // An ignored drop is cancelled whatever it names.
        if !self.controller.ignores_drop() {
            self.state().validate_drag(drag)?;
        }

        let mark = self.controller.sink().mark().await?;
        let transition = self.controller.on_drag_end(drag).await?;
        if !transition.changes_state() {
            return Ok(transition);
        }

        if let Some(change) = transition.payload() {
            let key = change.sort_key();
            if let Some(card) = self.controller.card_mut(&change.card.id) {
                card.set_position(key);
            }
        }

        if let Err(e) = self.save().await {
            tracing::warn!("Save failed, reverting move: {}", e);
            self.controller.undo();
            if let Err(rewind) = self.controller.sink().rewind(mark).await {
                tracing::error!("Could not rewind move journal: {}", rewind);
            }
            return Err(e);
        }
        Ok(transition)
    }

    pub async fn save(&self) -> BoardResult<()> {
        self.store.save(self.controller.state()).await
    }
}
