//! Append-only journal of card moves.
//!
//! Each accepted move is written as one JSON line, giving callers an audit
//! trail and a feed for replicating moves elsewhere.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dragboard_core::{BoardError, BoardResult};
use dragboard_domain::{ChangePayload, ChangeSink, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// One journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub recorded_at: DateTime<Utc>,
    pub card_id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_column_id: Option<String>,
    pub destination_column_id: String,
    pub destination_index: usize,
    pub sort_key: f64,
}

impl JournalEntry {
    pub fn from_change(change: &ChangePayload<Task>) -> Self {
        Self {
            recorded_at: Utc::now(),
            card_id: change.card.id,
            original_column_id: change.original_column_id.clone(),
            destination_column_id: change.destination_column_id.clone(),
            destination_index: change.destination_index,
            sort_key: change.sort_key(),
        }
    }
}

/// [`ChangeSink`] that appends every card move to a JSON-lines file.
#[derive(Debug, Clone)]
pub struct JournalSink {
    path: PathBuf,
}

impl JournalSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Journal stored next to a board file: `board.json` -> `board.json.moves.jsonl`.
    pub fn beside(board_path: impl AsRef<Path>) -> Self {
        let mut name = board_path.as_ref().as_os_str().to_owned();
        name.push(".moves.jsonl");
        Self::new(PathBuf::from(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current journal length in bytes, to [`rewind`](Self::rewind) to later.
    pub async fn mark(&self) -> BoardResult<u64> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Drop every line appended after `mark`.
    pub async fn rewind(&self, mark: u64) -> BoardResult<()> {
        let file = match tokio::fs::OpenOptions::new().write(true).open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && mark == 0 => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        file.set_len(mark).await?;
        tracing::debug!("Rewound {} to {} bytes", self.path.display(), mark);
        Ok(())
    }

    pub async fn read_entries(&self) -> BoardResult<Vec<JournalEntry>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| BoardError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl ChangeSink<Task> for JournalSink {
    async fn card_moved(&self, change: &ChangePayload<Task>) -> BoardResult<()> {
        let entry = JournalEntry::from_change(change);
        let mut line =
            serde_json::to_string(&entry).map_err(|e| BoardError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| BoardError::Sink {
                card: change.card.id.to_string(),
                reason: e.to_string(),
            })?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            "Journaled move of card {} to {}",
            entry.card_id,
            self.path.display()
        );
        Ok(())
    }
}
