//! The discovery engine: an upward directory walk with early stop.
//!
//! Responsibilities:
//! - Walk ancestor directories from the start path toward the root bound,
//!   running every configured loader against each directory.
//! - Settle on the first (nearest) directory yielding at least one validated
//!   source and cache that result for the engine's lifetime.
//!
//! Does NOT handle:
//! - File format recognition or parsing (see the loaders crate).
//! - Precedence among the sources it returns.
//!
//! Invariants:
//! - The walk is strictly upward, one level at a time, iterative, and never
//!   crosses the root bound; the root directory itself is still scanned.
//! - Traversal is read-only. A directory that cannot be listed (including a
//!   nonexistent start path) scans as empty and the walk continues.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use layerconf_loaders::{ConfigurationLoader, ConfigurationSource};

use crate::builder::DiscoveryBuilder;

/// Discovers configuration files by walking up from a starting directory.
///
/// ```no_run
/// use layerconf_discovery::ConfigurationDiscovery;
///
/// let discovery = ConfigurationDiscovery::builder("/srv/app/current")
///     .root_path("/srv")
///     .build()?;
/// for source in discovery.config_files() {
///     println!("found {}", source.filename().display());
/// }
/// # Ok::<(), layerconf_discovery::DiscoveryError>(())
/// ```
pub struct ConfigurationDiscovery {
    start_path: PathBuf,
    root_path: PathBuf,
    filetypes: Vec<Box<dyn ConfigurationLoader>>,
    config_files: OnceLock<Vec<Box<dyn ConfigurationSource>>>,
}

impl std::fmt::Debug for ConfigurationDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationDiscovery")
            .field("start_path", &self.start_path)
            .field("root_path", &self.root_path)
            .finish_non_exhaustive()
    }
}

impl ConfigurationDiscovery {
    /// Start building an engine that searches upward from `start_path`.
    pub fn builder(start_path: impl Into<PathBuf>) -> DiscoveryBuilder {
        DiscoveryBuilder::new(start_path)
    }

    pub(crate) fn new(
        start_path: PathBuf,
        root_path: PathBuf,
        filetypes: Vec<Box<dyn ConfigurationLoader>>,
    ) -> Self {
        Self {
            start_path,
            root_path,
            filetypes,
            config_files: OnceLock::new(),
        }
    }

    /// The normalized directory where the search begins.
    pub fn start_path(&self) -> &Path {
        &self.start_path
    }

    /// The normalized directory bounding the upward walk (inclusive).
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The validated sources from the nearest directory that yielded any,
    /// or an empty slice if none did.
    ///
    /// The walk runs once per engine instance; repeated calls return the
    /// cached result without touching the filesystem again.
    pub fn config_files(&self) -> &[Box<dyn ConfigurationSource>] {
        self.config_files.get_or_init(|| self.discover())
    }

    fn discover(&self) -> Vec<Box<dyn ConfigurationSource>> {
        let mut current = self.start_path.as_path();
        loop {
            tracing::debug!(directory = %current.display(), "scanning directory");
            let found = self.scan_directory(current);
            if !found.is_empty() {
                tracing::debug!(
                    directory = %current.display(),
                    count = found.len(),
                    "configuration files discovered"
                );
                return found;
            }

            if current == self.root_path {
                break;
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        tracing::debug!(
            start = %self.start_path.display(),
            root = %self.root_path.display(),
            "no configuration files discovered"
        );
        Vec::new()
    }

    fn scan_directory(&self, directory: &Path) -> Vec<Box<dyn ConfigurationSource>> {
        self.filetypes
            .iter()
            .flat_map(|loader| loader.scan(directory))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_result_is_memoized_across_calls() {
        let dir = TempDir::new().unwrap();
        let env_path = dir.path().join(".env");
        fs::write(&env_path, "A=1\n").unwrap();

        let discovery = ConfigurationDiscovery::builder(dir.path())
            .root_path(dir.path())
            .build()
            .unwrap();

        assert_eq!(discovery.config_files().len(), 1);

        // A second call must not re-walk the filesystem.
        fs::remove_file(&env_path).unwrap();
        assert_eq!(discovery.config_files().len(), 1);
    }

    #[test]
    fn test_empty_result_is_memoized_too() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigurationDiscovery::builder(dir.path())
            .root_path(dir.path())
            .build()
            .unwrap();

        assert!(discovery.config_files().is_empty());

        fs::write(dir.path().join(".env"), "A=1\n").unwrap();
        assert!(discovery.config_files().is_empty());
    }

    #[test]
    fn test_accessors_expose_normalized_paths() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigurationDiscovery::builder(dir.path())
            .root_path(dir.path())
            .build()
            .unwrap();

        assert!(discovery.start_path().is_absolute());
        assert_eq!(discovery.start_path(), discovery.root_path());
    }
}
