//! Validation error for diff scripts.

use super::command::{Side, Symbol};
use std::fmt;
use thiserror::Error;

/// Why a diff script was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    /// The line holds zero, or more than one, of the symbol characters `a`, `c`, `d`.
    SymbolCount { found: usize },
    /// The line contains a space character.
    EmbeddedSpace,
    /// One side of the symbol has too few or too many comma-separated components.
    ArgumentCount { side: Side, found: usize, max: usize },
    /// A component is not a non-negative decimal line number.
    NonNumeric { component: String },
    /// A delete and a change (either order) cover contiguous source ranges.
    AdjacentDeleteChange { previous: Symbol },
    /// A delete's target position does not sit directly before its source start.
    DeleteOffset {
        source_start: usize,
        target_start: usize,
    },
}

impl fmt::Display for ScriptErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptErrorKind::SymbolCount { found } => write!(
                f,
                "expected exactly one of 'a', 'c' or 'd', found {} symbol characters",
                found
            ),
            ScriptErrorKind::EmbeddedSpace => write!(f, "commands must not contain spaces"),
            ScriptErrorKind::ArgumentCount { side, found, max } => write!(
                f,
                "{} side takes 1 to {} line numbers, found {}",
                side, max, found
            ),
            ScriptErrorKind::NonNumeric { component } => {
                write!(f, "'{}' is not a line number", component)
            }
            ScriptErrorKind::AdjacentDeleteChange { previous } => write!(
                f,
                "source range continues the previous '{}' command; they should be one command",
                previous
            ),
            ScriptErrorKind::DeleteOffset {
                source_start,
                target_start,
            } => write!(
                f,
                "delete of line {} must sync to line {} of the new file, not {}",
                source_start,
                source_start.saturating_sub(1),
                target_start
            ),
        }
    }
}

/// Raised when a script cannot possibly be the commands for the diff of two files.
///
/// Validation is all-or-nothing: the first failing line or cross-check aborts
/// the whole script and no partial result is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Cannot possibly be the commands for the diff of two files: line {line_number} ('{line}'): {kind}"
)]
pub struct DiffCommandsError {
    /// 1-based position of the offending line in the script.
    pub line_number: usize,
    /// The offending line, without its terminator.
    pub line: String,
    pub kind: ScriptErrorKind,
}

impl DiffCommandsError {
    pub fn new(line_number: usize, line: impl Into<String>, kind: ScriptErrorKind) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }
}
