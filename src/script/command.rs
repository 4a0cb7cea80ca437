//! Core types for parsed diff script commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operation a command performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Lines are added after a position in the original file (`a`).
    Append,
    /// A block of the original file is replaced (`c`).
    Change,
    /// A block of the original file is removed (`d`).
    Delete,
}

impl Symbol {
    /// All symbols, in the order they are documented.
    pub const ALL: [Symbol; 3] = [Symbol::Append, Symbol::Change, Symbol::Delete];

    /// The character used for this symbol in a script line.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Append => 'a',
            Symbol::Change => 'c',
            Symbol::Delete => 'd',
        }
    }

    /// Parse a symbol from its script character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Symbol::Append),
            'c' => Some(Symbol::Change),
            'd' => Some(Symbol::Delete),
            _ => None,
        }
    }

    /// Maximum number of comma-separated components allowed on the
    /// (source, target) side of this symbol. The minimum is always 1.
    pub fn max_components(self) -> (usize, usize) {
        match self {
            Symbol::Append => (1, 2),
            Symbol::Delete => (2, 1),
            Symbol::Change => (2, 2),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which side of the symbol a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Before the symbol: line numbers in the original file.
    Source,
    /// After the symbol: line numbers in the new file.
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// An inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A degenerate range covering exactly one line number.
    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of lines covered, or 0 for an inverted range.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.end)
        }
    }
}

/// One parsed diff script directive, e.g. `3,5c3,4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    pub symbol: Symbol,
    /// Range in the original file.
    pub source_range: LineRange,
    /// Range in the new file.
    pub target_range: LineRange,
}

impl Command {
    pub fn new(symbol: Symbol, source_range: LineRange, target_range: LineRange) -> Self {
        Self {
            symbol,
            source_range,
            target_range,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source_range, self.symbol, self.target_range)
    }
}
