//! File-backed line and script sources.
//!
//! The diff core only ever sees materialized line sequences; this module is
//! the thin layer that reads them from disk.

use crate::config::Config;
use crate::error::{LineDiffError, Result};
use std::path::Path;

/// Read a file into its ordered lines.
///
/// With `keep_line_endings` (the default) every line keeps its `\n` or
/// `\r\n`, matching how the lines compare in the LCS. A final line without a
/// terminator is kept as is.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Lines in file order (empty for an empty file)
/// * `Err(LineDiffError::Io)` - The file is missing, unreadable or not UTF-8
pub fn read_lines<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<String>> {
    let content = read_file(path.as_ref())?;

    let lines = if config.keep_line_endings {
        content.split_inclusive('\n').map(str::to_string).collect()
    } else {
        content.lines().map(str::to_string).collect()
    };

    Ok(lines)
}

/// Read a diff script into its raw command lines, without terminators.
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = read_file(path.as_ref())?;
    Ok(content.lines().map(str::to_string).collect())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        LineDiffError::Io(format!("failed to read '{}': {}", path.display(), e))
    })
}
