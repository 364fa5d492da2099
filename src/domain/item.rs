//! Item - List Record

use serde::{Deserialize, Serialize};

/// A single list record. Immutable once materialized from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique ID assigned by the database, monotonically ascending
    pub id: i64,
    /// Title line
    pub title: String,
    /// Message body
    pub message: String,
}

impl Item {
    /// Create a new Item
    pub fn new(id: i64, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A record awaiting insertion; the database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Title line
    pub title: String,
    /// Message body
    pub message: String,
}

impl ItemDraft {
    /// Create a new ItemDraft
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
