//! Longest common subsequence engine.

use tracing::{debug, warn};

use super::backtrack::enumerate;
use super::candidates::CommonSubsequenceSet;
use super::grid::LcsGrid;
use crate::config::Config;

/// Computes every maximal common subsequence of two line sequences.
///
/// Filling the grid is O(n·m) in time and space. Enumeration is exponential
/// in the number of tie points in the worst case; set `max_candidates` to
/// bound it.
#[derive(Debug, Clone, Default)]
pub struct LcsEngine {
    max_candidates: Option<usize>,
}

impl LcsEngine {
    /// An engine that enumerates without limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that keeps at most `max` sequences per grid cell.
    pub fn with_max_candidates(max: usize) -> Self {
        Self {
            max_candidates: Some(max),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            max_candidates: config.max_candidates,
        }
    }

    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }

    /// Compute the candidate set for `file1` (original) against `file2` (revised).
    ///
    /// # Example
    ///
    /// ```
    /// use linediff::lcs::LcsEngine;
    ///
    /// let candidates = LcsEngine::new().compute(&["a", "b", "c"], &["a", "x", "c"]);
    /// assert_eq!(candidates.lcs_length(), 2);
    /// assert!(candidates.contains(&["a", "c"]));
    /// ```
    pub fn compute<A, B>(&self, file1: &[A], file2: &[B]) -> CommonSubsequenceSet
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let grid = LcsGrid::build(file1, file2);
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            lcs_length = grid.lcs_length(),
            "filled lcs grid"
        );

        let enumeration = enumerate(&grid, file1, self.max_candidates);
        if enumeration.truncated {
            warn!(
                max_candidates = ?self.max_candidates,
                "common subsequence enumeration truncated"
            );
        }

        let sequences = enumeration
            .sequences
            .into_iter()
            .map(|seq| seq.into_iter().map(str::to_string).collect())
            .collect();
        let candidates =
            CommonSubsequenceSet::new(grid.lcs_length(), sequences, enumeration.truncated);
        debug!(candidates = candidates.len(), "enumerated common subsequences");

        candidates
    }
}
