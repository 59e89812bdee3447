//! Error types.
//!
//! Only the external boundaries can fail: the key-value store, the text
//! generator behind feedback, and parsing of persisted data. Placement rules
//! never produce errors; rejected interactions come back as
//! [`Interaction`](crate::core::Interaction) outcomes instead.

use thiserror::Error;

/// Failure of the key-value store behind history and profile persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,

    #[error("storage backend failed: {message}")]
    Backend { message: String },
}

/// Failure of the external text generator.
///
/// Never surfaced to the player: every variant maps to a localized
/// fallback sentence (see [`crate::feedback`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("text generator is unavailable")]
    Unavailable,

    #[error("text generator returned an empty response")]
    EmptyResponse,

    #[error("text generator request failed: {message}")]
    Transport { message: String },
}

/// Failure while reading or writing the play history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("corrupt history record list: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure while reading or writing the user profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("corrupt user profile: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure to parse an identifier from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("unknown trigram id: {0}")]
    Trigram(String),

    #[error("unknown locale: {0}")]
    Locale(String),

    #[error("unknown wisdom kind: {0}")]
    WisdomKind(String),
}

/// Failure to load an [`AppConfig`](crate::core::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {message}")]
    Invalid { message: String },
}
