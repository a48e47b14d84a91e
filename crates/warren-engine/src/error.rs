//! Error types for the Warren engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode during engine startup and the tick loop.

use crate::config::ConfigError;
use crate::runner::RunnerError;

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// World setup or the tick loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: RunnerError,
    },

    /// The chronicle task panicked or was cancelled.
    #[error("chronicle task failed: {source}")]
    Chronicle {
        /// The underlying join error.
        #[from]
        source: tokio::task::JoinError,
    },
}
