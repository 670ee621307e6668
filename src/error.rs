use std::path::PathBuf;

use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while loading or generating a scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// Scenario file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario generation parameters are unusable.
    #[error("invalid scenario parameters: {0}")]
    InvalidScenario(String),

    /// Could not set global default subscriber.
    #[error("could not set global default subscriber: {0}")]
    SetTracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}
