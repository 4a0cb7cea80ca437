//! Diff sessions over an original and a revised file.
//!
//! A [`DiffSession`] owns both line sequences for its lifetime and computes
//! their maximal common subsequences once, on first request.

use std::cell::OnceCell;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::lcs::{CommonSubsequenceSet, LcsEngine};
use crate::script::DiffScript;
use crate::source;

/// Two immutable line sequences and their memoized LCS candidates.
#[derive(Debug)]
pub struct DiffSession {
    original: Vec<String>,
    revised: Vec<String>,
    engine: LcsEngine,
    candidates: OnceCell<CommonSubsequenceSet>,
}

impl DiffSession {
    /// Create a session with an unbounded engine.
    pub fn new(original: Vec<String>, revised: Vec<String>) -> Self {
        Self::with_engine(original, revised, LcsEngine::new())
    }

    pub fn with_config(original: Vec<String>, revised: Vec<String>, config: &Config) -> Self {
        Self::with_engine(original, revised, LcsEngine::from_config(config))
    }

    pub fn with_engine(original: Vec<String>, revised: Vec<String>, engine: LcsEngine) -> Self {
        Self {
            original,
            revised,
            engine,
            candidates: OnceCell::new(),
        }
    }

    /// Read both files through the line source and open a session on them.
    ///
    /// # Returns
    ///
    /// * `Ok(DiffSession)` - Both files were read
    /// * `Err(LineDiffError::Io)` - Either file could not be read
    pub fn from_files<P, Q>(original: P, revised: Q, config: &Config) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let original = source::read_lines(original, config)?;
        let revised = source::read_lines(revised, config)?;
        Ok(Self::with_config(original, revised, config))
    }

    pub fn original(&self) -> &[String] {
        &self.original
    }

    pub fn revised(&self) -> &[String] {
        &self.revised
    }

    /// Every maximal common subsequence of the original and revised lines.
    ///
    /// Computed on the first call; later calls return the same set.
    pub fn lcs_candidates(&self) -> &CommonSubsequenceSet {
        self.candidates.get_or_init(|| {
            debug!(
                original_lines = self.original.len(),
                revised_lines = self.revised.len(),
                "computing lcs candidates"
            );
            self.engine.compute(&self.original, &self.revised)
        })
    }

    pub fn lcs_length(&self) -> usize {
        self.lcs_candidates().lcs_length()
    }
}

/// Downstream diff generation built on a session's candidates.
///
/// This crate ships no implementation; it fixes the contract a generator
/// must satisfy.
pub trait DiffGenerator {
    /// Render a human-readable diff transcript of the session.
    fn output_diff(&self, session: &DiffSession) -> Result<String>;

    /// Lines of the original file that `script` leaves untouched, in order.
    fn unmodified_from_original(
        &self,
        session: &DiffSession,
        script: &DiffScript,
    ) -> Result<Vec<String>>;

    /// Lines of the revised file that `script` did not introduce, in order.
    fn unmodified_from_new(&self, session: &DiffSession, script: &DiffScript)
    -> Result<Vec<String>>;

    /// Diff scripts equivalent to the session's candidate subsequences.
    fn diff_commands(&self, session: &DiffSession) -> Result<Vec<DiffScript>>;
}
