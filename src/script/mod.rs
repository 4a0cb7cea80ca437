//! Ed-style diff script parsing and validation.
//!
//! A diff script describes how to turn one file into another with commands
//! over 1-based line ranges:
//! - `10a11,12` appends lines 11-12 of the new file after line 10
//! - `3,5c3,4` changes lines 3-5 into lines 3-4
//! - `1,2d0` deletes lines 1-2, syncing to line 0 of the new file
//!
//! Parsing is all-or-nothing: [`DiffScript::parse`] either returns a fully
//! validated script or the first [`DiffCommandsError`] encountered.

mod command;
mod diff_script;
mod error;
mod parser;

#[cfg(test)]
mod tests;

// Re-export public API
pub use command::{Command, LineRange, Side, Symbol};
pub use diff_script::DiffScript;
pub use error::{DiffCommandsError, ScriptErrorKind};
