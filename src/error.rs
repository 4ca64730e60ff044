//! Process-level errors.

use thiserror::Error;

/// Errors that stop the café service from starting or shutting down cleanly.
#[derive(Debug, Error)]
pub enum CafeError {
    /// Binding the listener or serving requests failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line or environment setting was rejected.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The actor task did not finish cleanly.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
