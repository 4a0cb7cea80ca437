//! Validated diff scripts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use super::command::{Command, Symbol};
use super::error::{DiffCommandsError, ScriptErrorKind};
use super::parser::{parse_command, strip_terminator};
use crate::error::Result;
use crate::source;

/// An ordered, fully validated list of diff commands.
///
/// A `DiffScript` only exists if every line parsed and every cross-command
/// rule held; there is no partially validated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffScript {
    commands: Vec<Command>,
}

impl DiffScript {
    /// Parse and validate a script from its raw command lines.
    ///
    /// Each line is parsed on its own first; once every line parsed, the
    /// commands are checked together:
    /// - a delete and a change (in either order) must not be adjacent with
    ///   contiguous source ranges
    /// - every delete must sync to the line just before its source start
    ///   (`source.start == target.start + 1`)
    ///
    /// # Arguments
    ///
    /// * `raw_lines` - Script lines in file order, with or without terminators
    ///
    /// # Returns
    ///
    /// * `Ok(DiffScript)` - Every line and cross-check passed
    /// * `Err(DiffCommandsError)` - The first violation, with its line number and text
    pub fn parse<I, S>(raw_lines: I) -> std::result::Result<Self, DiffCommandsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = Vec::new();
        let mut commands = Vec::new();

        for (index, raw) in raw_lines.into_iter().enumerate() {
            let line = strip_terminator(raw.as_ref()).to_string();
            let command = parse_command(&line)
                .map_err(|kind| DiffCommandsError::new(index + 1, line.as_str(), kind))?;
            commands.push(command);
            lines.push(line);
        }

        check_consistency(&commands, &lines)?;

        debug!(commands = commands.len(), "parsed diff script");
        Ok(Self { commands })
    }

    /// Parse a script held in memory, one command per line.
    pub fn parse_str(text: &str) -> std::result::Result<Self, DiffCommandsError> {
        Self::parse(text.lines())
    }

    /// Read and validate a script file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lines = source::read_script(path)?;
        Ok(Self::parse(lines)?)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a DiffScript {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DiffScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Run the cross-command rules, in script order.
///
/// For each position the pair rule with the next command is checked before
/// the delete offset rule of the command itself.
fn check_consistency(
    commands: &[Command],
    lines: &[String],
) -> std::result::Result<(), DiffCommandsError> {
    for (i, command) in commands.iter().enumerate() {
        if let Some(next) = commands.get(i + 1)
            && is_delete_change_pair(command.symbol, next.symbol)
            && command.source_range.end.checked_add(1) == Some(next.source_range.start)
        {
            return Err(DiffCommandsError::new(
                i + 2,
                lines[i + 1].as_str(),
                ScriptErrorKind::AdjacentDeleteChange {
                    previous: command.symbol,
                },
            ));
        }

        if command.symbol == Symbol::Delete
            && command.target_range.start.checked_add(1) != Some(command.source_range.start)
        {
            return Err(DiffCommandsError::new(
                i + 1,
                lines[i].as_str(),
                ScriptErrorKind::DeleteOffset {
                    source_start: command.source_range.start,
                    target_start: command.target_range.start,
                },
            ));
        }
    }

    Ok(())
}

fn is_delete_change_pair(first: Symbol, second: Symbol) -> bool {
    matches!(
        (first, second),
        (Symbol::Change, Symbol::Delete) | (Symbol::Delete, Symbol::Change)
    )
}
