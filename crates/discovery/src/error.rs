//! Error types for configuration discovery.
//!
//! Invariants:
//! - Construction is the only fallible step. Once an engine exists, a
//!   discovery run cannot fail: malformed or unreadable files degrade to
//!   absence inside the loaders and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a discovery engine.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The configured root does not contain the starting path, so the
    /// upward walk would never reach it.
    #[error("root path {root} is not an ancestor of start path {start}")]
    InvalidPath { root: PathBuf, start: PathBuf },
}
