use crate::store::atomic_writer::AtomicWriter;
use chrono::{DateTime, Utc};
use dragboard_core::{BoardError, BoardResult};
use dragboard_domain::{BoardState, ColumnSpec, Task};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

/// The board as written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(default)]
    pub columns: Vec<ColumnSpec<Task>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BoardEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    board: BoardDocument,
}

/// A board kept in a single versioned JSON file.
#[derive(Debug, Clone)]
pub struct BoardFileStore {
    path: PathBuf,
}

impl BoardFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Write a board made of `columns`, replacing any existing file.
    pub async fn create(&self, columns: Vec<ColumnSpec<Task>>) -> BoardResult<()> {
        self.write_document(BoardDocument { columns }).await
    }

    pub async fn save(&self, state: &BoardState<Task>) -> BoardResult<()> {
        self.write_document(BoardDocument {
            columns: state.to_columns(),
        })
        .await
    }

    /// Read and validate the board.
    pub async fn load(&self) -> BoardResult<BoardState<Task>> {
        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: BoardEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(BoardError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        let state = BoardState::from_columns(envelope.board.columns);
        state.validate()?;

        tracing::info!(
            "Loaded board with {} columns and {} cards from {}",
            state.column_order().len(),
            state.card_count(),
            self.path.display()
        );
        Ok(state)
    }

    async fn write_document(&self, board: BoardDocument) -> BoardResult<()> {
        let envelope = BoardEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            board,
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
