//! Configuration model for linediff.
//!
//! This module defines the Config struct, loadable from YAML. It supports
//! forward-compatible parsing (unknown fields are ignored), defaults for every
//! field, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
