//! Per-line parsing of ed-style diff commands.

use regex::Regex;
use std::sync::LazyLock;

use super::command::{Command, LineRange, Side, Symbol};
use super::error::ScriptErrorKind;

static LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("line number pattern is a valid regex")
});

/// Strip a trailing `\n` or `\r\n` left over from reading the script.
pub(super) fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Parse a single script line into a [`Command`].
///
/// Checks run in a fixed order and the first failure wins:
/// 1. exactly one symbol character (`a`, `c` or `d`) in the whole line
/// 2. no space characters
/// 3. component counts on each side within the symbol's bounds
/// 4. every component is a decimal line number
///
/// The line is expected without its terminator (see [`strip_terminator`]).
pub(super) fn parse_command(line: &str) -> Result<Command, ScriptErrorKind> {
    let symbols: Vec<(usize, Symbol)> = line
        .char_indices()
        .filter_map(|(i, c)| Symbol::from_char(c).map(|s| (i, s)))
        .collect();

    let (split_at, symbol) = match symbols.as_slice() {
        [only] => *only,
        _ => {
            return Err(ScriptErrorKind::SymbolCount {
                found: symbols.len(),
            });
        }
    };

    if line.contains(' ') {
        return Err(ScriptErrorKind::EmbeddedSpace);
    }

    // Symbol characters are ASCII, so the byte after it is a char boundary
    let prefix: Vec<&str> = line[..split_at].split(',').collect();
    let suffix: Vec<&str> = line[split_at + 1..].split(',').collect();

    let (source_max, target_max) = symbol.max_components();
    check_count(Side::Source, prefix.len(), source_max)?;
    check_count(Side::Target, suffix.len(), target_max)?;

    let source_range = parse_range(Side::Source, &prefix)?;
    let target_range = parse_range(Side::Target, &suffix)?;

    Ok(Command::new(symbol, source_range, target_range))
}

fn check_count(side: Side, found: usize, max: usize) -> Result<(), ScriptErrorKind> {
    if (1..=max).contains(&found) {
        Ok(())
    } else {
        Err(ScriptErrorKind::ArgumentCount { side, found, max })
    }
}

/// Turn one or two components into a range; a single number collapses to `(n, n)`.
fn parse_range(side: Side, components: &[&str]) -> Result<LineRange, ScriptErrorKind> {
    match components {
        [line] => Ok(LineRange::single(parse_line_number(line)?)),
        [start, end] => Ok(LineRange::new(
            parse_line_number(start)?,
            parse_line_number(end)?,
        )),
        _ => Err(ScriptErrorKind::ArgumentCount {
            side,
            found: components.len(),
            max: 2,
        }),
    }
}

fn parse_line_number(component: &str) -> Result<usize, ScriptErrorKind> {
    let non_numeric = || ScriptErrorKind::NonNumeric {
        component: component.to_string(),
    };

    if !LINE_NUMBER.is_match(component) {
        return Err(non_numeric());
    }
    // Overflow folds into the same kind as any other bad number
    component.parse().map_err(|_| non_numeric())
}
