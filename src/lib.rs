//! linediff: ed-style diff script validation and line LCS enumeration.
//!
//! Two independent pieces of classic line-oriented diffing:
//! - [`script`] parses and validates diff scripts (`3,5c3,4`, `10a11,12`,
//!   `1,2d0`) into a [`DiffScript`]
//! - [`lcs`] computes every maximal common subsequence of two line
//!   sequences, and [`session::DiffSession`] memoizes that result for a pair
//!   of files
//!
//! Both operate on materialized line sequences; [`source`] reads them from disk.
//!
//! ```
//! use linediff::{DiffScript, DiffSession};
//!
//! let script = DiffScript::parse(["1,2d0", "4,5c3,4", "10a11,12"])?;
//! assert_eq!(script.len(), 3);
//!
//! let session = DiffSession::new(
//!     vec!["a".into(), "b".into(), "c".into()],
//!     vec!["a".into(), "x".into(), "c".into()],
//! );
//! assert!(session.lcs_candidates().contains(&["a", "c"]));
//! # Ok::<(), linediff::error::LineDiffError>(())
//! ```

pub mod config;
pub mod error;
pub mod lcs;
pub mod script;
pub mod session;
pub mod source;

pub use config::Config;
pub use error::{LineDiffError, Result};
pub use lcs::{CommonSubsequenceSet, LcsEngine};
pub use script::{Command, DiffCommandsError, DiffScript, LineRange, Symbol};
pub use session::{DiffGenerator, DiffSession};
