//! The loader capability contract.
//!
//! Responsibilities:
//! - Define how a file format plugs into directory discovery: one strategy
//!   per naming convention, scanned against one directory at a time.
//!
//! Does NOT handle:
//! - Walking between directories (see the discovery crate).
//! - Precedence among sources found in the same directory.
//!
//! Invariants:
//! - `scan` never returns an error. A missing file, an unreadable file, and
//!   content that fails to parse all collapse to "fewer sources"; the caller
//!   cannot distinguish them and is not meant to.

use std::path::Path;

use crate::source::ConfigurationSource;

/// A pluggable strategy that recognizes and parses one configuration file
/// format within a directory.
pub trait ConfigurationLoader {
    /// Find every file in `directory` matching this loader's naming rule,
    /// attempt a full parse of each, and return one source per file that
    /// validated. A glob-style rule may yield several sources; an exact-name
    /// rule yields at most one.
    fn scan(&self, directory: &Path) -> Vec<Box<dyn ConfigurationSource>>;
}
