use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BOARD_CONTEXT_ID: &str = "board";
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Droppable id that marks a drag as a column drag rather than a card drag.
    #[serde(default)]
    pub board_context_id: Option<String>,
    #[serde(default)]
    pub history_depth: Option<usize>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/dragboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("dragboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("dragboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    return Self::parse(&content).unwrap_or_default();
                }
            }
        }
        Self::default()
    }

    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    pub fn effective_board_context_id(&self) -> &str {
        self.board_context_id
            .as_deref()
            .unwrap_or(DEFAULT_BOARD_CONTEXT_ID)
    }

    pub fn effective_history_depth(&self) -> usize {
        self.history_depth.unwrap_or(DEFAULT_HISTORY_DEPTH)
    }
}
