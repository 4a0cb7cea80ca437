//! Error types for linediff.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Diff script validation failures carry their own detailed type,
//! [`DiffCommandsError`], which converts into [`LineDiffError`] with `?`.

use crate::script::DiffCommandsError;
use thiserror::Error;

/// Main error type for linediff operations.
#[derive(Error, Debug)]
pub enum LineDiffError {
    /// A diff script failed structural or cross-command validation.
    #[error(transparent)]
    Script(#[from] DiffCommandsError),

    /// A line or script source could not be read.
    #[error("I/O failed: {0}")]
    Io(String),

    /// Configuration could not be parsed or holds an invalid value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for linediff operations.
pub type Result<T> = std::result::Result<T, LineDiffError>;
