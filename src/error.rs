//! Error types shared by the store, analytics and tip client

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input broke a model invariant (zero reps, negative weight, empty name...)
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Workout plan not found: {0}")]
    PlanNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Corrupt data under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Tip service error: {0}")]
    TipService(String),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
