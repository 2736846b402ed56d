use chrono::{DateTime, Utc};
use dragboard_core::CardItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sort_key::Positioned;

pub type TaskId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Fractional sort key within the owning column.
    #[serde(default)]
    pub position: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, position: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

impl CardItem for Task {
    type Id = TaskId;

    fn card_id(&self) -> Self::Id {
        self.id
    }
}

impl Positioned for Task {
    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
        self.updated_at = Utc::now();
    }
}
