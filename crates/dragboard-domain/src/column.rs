use serde::{Deserialize, Serialize};

/// A column as supplied by the caller: key, display title, and its cards in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec<C> {
    pub key: String,
    pub title: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<C>,
}

impl<C> ColumnSpec<C> {
    pub fn new(key: impl Into<String>, title: impl Into<String>, data: Vec<C>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data,
        }
    }

    pub fn empty(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, Vec::new())
    }
}
