//! Session records and their encodings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ActionRecord, GameState};

/// Errors from encoding, decoding or writing session records.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One immutable log entry: what was done and the state it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub action: ActionRecord,
    pub state: GameState,
}

impl SessionRecord {
    #[must_use]
    pub fn new(action: ActionRecord, state: GameState) -> Self {
        Self { action, state }
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`SessionRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// JSON encoding, one line, suitable for a text log.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a record produced by [`SessionRecord::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}
