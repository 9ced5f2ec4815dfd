//! Path-related error types.

use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// An override variable was set but empty.
    #[error("{0} is set but empty")]
    EmptyOverride(&'static str),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
