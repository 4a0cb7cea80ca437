//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for line sources and LCS enumeration.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on the maximal common subsequences kept per grid cell
    /// during enumeration. `None` enumerates every one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<usize>,

    /// Keep each line's terminator when reading files, so that lines differing
    /// only in their line ending compare unequal.
    pub keep_line_endings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: None,
            keep_line_endings: true,
        }
    }
}
