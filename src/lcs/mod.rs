//! Longest common subsequence over lines.
//!
//! [`LcsGrid`] is the classic dynamic-programming table, with every tied
//! direction recorded per cell. [`LcsEngine`] fills it and walks it back to
//! enumerate all maximal common subsequences, not just one.

mod backtrack;
mod candidates;
mod engine;
mod grid;


// Re-export public API
pub use candidates::CommonSubsequenceSet;
pub use engine::LcsEngine;
pub use grid::{Direction, Directions, LcsGrid, Pointer};
