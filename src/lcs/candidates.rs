//! The set of maximal common subsequences produced by the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct line sequences, all of maximal common length.
///
/// When the inputs share no line (or either is empty) the set holds exactly
/// one empty sequence. Iteration order is lexicographic and stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSubsequenceSet {
    length: usize,
    sequences: BTreeSet<Vec<String>>,
    truncated: bool,
}

impl CommonSubsequenceSet {
    pub(super) fn new(length: usize, sequences: BTreeSet<Vec<String>>, truncated: bool) -> Self {
        Self {
            length,
            sequences,
            truncated,
        }
    }

    /// Length shared by every sequence in the set.
    pub fn lcs_length(&self) -> usize {
        self.length
    }

    /// Number of distinct sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Whether enumeration stopped at the configured candidate limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn contains<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        self.sequences.iter().any(|candidate| {
            candidate.len() == sequence.len()
                && candidate
                    .iter()
                    .zip(sequence)
                    .all(|(a, b)| a.as_str() == b.as_ref())
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.sequences.iter().map(Vec::as_slice)
    }

    /// Any one maximal sequence, for callers that need a single answer.
    pub fn representative(&self) -> Option<&[String]> {
        self.sequences.first().map(Vec::as_slice)
    }
}

impl<'a> IntoIterator for &'a CommonSubsequenceSet {
    type Item = &'a Vec<String>;
    type IntoIter = std::collections::btree_set::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
