//! Builder for the discovery engine.
//!
//! Responsibilities:
//! - Collect the start path, optional root bound, and loader set.
//! - Normalize both paths to absolute form and enforce the containment
//!   invariant before any engine exists.
//!
//! Invariants:
//! - Containment is checked component-wise on normalized paths, so
//!   `/foo/bar` is never treated as an ancestor of `/foo/barbaz`.
//! - Neither path is required to exist; normalization never touches the
//!   filesystem beyond resolving the current directory.

use std::path::{Path, PathBuf};

use layerconf_loaders::{ConfigurationLoader, EnvFileLoader, IniFileLoader};

use crate::engine::ConfigurationDiscovery;
use crate::error::DiscoveryError;

/// Builds a [`ConfigurationDiscovery`] engine.
///
/// Created via [`ConfigurationDiscovery::builder`].
pub struct DiscoveryBuilder {
    start_path: PathBuf,
    root_path: Option<PathBuf>,
    filetypes: Option<Vec<Box<dyn ConfigurationLoader>>>,
}

impl DiscoveryBuilder {
    pub(crate) fn new(start_path: impl Into<PathBuf>) -> Self {
        Self {
            start_path: start_path.into(),
            root_path: None,
            filetypes: None,
        }
    }

    /// Bound the upward walk at `root_path` (inclusive). Defaults to the
    /// filesystem root of the start path.
    pub fn root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(root_path.into());
        self
    }

    /// Replace the default loader set (`.env` then `*.ini` / `*.cfg`).
    /// Order determines result order within the stopping directory, not
    /// precedence among directories.
    pub fn filetypes(mut self, filetypes: Vec<Box<dyn ConfigurationLoader>>) -> Self {
        self.filetypes = Some(filetypes);
        self
    }

    /// Validate the path relationship and produce the engine.
    ///
    /// # Errors
    /// Returns [`DiscoveryError::InvalidPath`] if the normalized root is not
    /// an ancestor of (or equal to) the normalized start path.
    pub fn build(self) -> Result<ConfigurationDiscovery, DiscoveryError> {
        let start_path = normalize(&self.start_path);
        let root_path = match self.root_path {
            Some(root) => normalize(&root),
            None => filesystem_root(&start_path),
        };

        if !start_path.starts_with(&root_path) {
            return Err(DiscoveryError::InvalidPath {
                root: root_path,
                start: start_path,
            });
        }

        let filetypes = self.filetypes.unwrap_or_else(|| {
            vec![
                Box::new(EnvFileLoader::default()),
                Box::new(IniFileLoader::default()),
            ]
        });

        Ok(ConfigurationDiscovery::new(start_path, root_path, filetypes))
    }
}

/// Make `path` absolute without resolving symlinks or requiring existence.
fn normalize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// The outermost ancestor of `path`: `/` on Unix, the drive or prefix root
/// on Windows.
fn filesystem_root(path: &Path) -> PathBuf {
    path.ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
