//! INI-style file loader.
//!
//! Responsibilities:
//! - Match files by extension (default `*.ini` and `*.cfg`) in a directory.
//! - Validate each match: the file must parse as INI and carry the required
//!   settings section, otherwise it is treated as absent.
//!
//! Invariants:
//! - Matches within one directory are scanned in lexicographic filename
//!   order, so the produced sources are deterministic.
//! - Key lookups read only the required section; other sections are ignored.

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::loader::ConfigurationLoader;
use crate::source::ConfigurationSource;

/// Name of the section an INI file must define to be considered a
/// configuration source.
pub const DEFAULT_SECTION: &str = "settings";

/// Loads INI-style files (`*.ini`, `*.cfg`) from a directory.
#[derive(Debug, Clone)]
pub struct IniFileLoader {
    extensions: Vec<String>,
    section: String,
}

impl Default for IniFileLoader {
    fn default() -> Self {
        Self {
            extensions: vec!["ini".to_string(), "cfg".to_string()],
            section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl IniFileLoader {
    /// Create a loader matching the conventional `*.ini` / `*.cfg` patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the matched file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Override the section a file must define to validate.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn parse(&self, path: &Path) -> Option<IniFileSource> {
        let ini = match Ini::load_from_file(path) {
            Ok(ini) => ini,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping malformed ini file");
                return None;
            }
        };

        let Some(section) = ini.section(Some(self.section.as_str())) else {
            tracing::debug!(
                path = %path.display(),
                section = %self.section,
                "skipping ini file without required section"
            );
            return None;
        };

        let entries = section
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let filename = std::path::absolute(path).ok()?;
        Some(IniFileSource { filename, entries })
    }
}

impl ConfigurationLoader for IniFileLoader {
    fn scan(&self, directory: &Path) -> Vec<Box<dyn ConfigurationSource>> {
        let Ok(read_dir) = std::fs::read_dir(directory) else {
            return Vec::new();
        };

        let mut matches: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| self.matches(path))
            .collect();
        matches.sort();

        matches
            .iter()
            .filter_map(|path| self.parse(path))
            .map(|source| Box::new(source) as Box<dyn ConfigurationSource>)
            .collect()
    }
}

/// A validated INI file, scoped to its settings section.
#[derive(Debug, Clone)]
pub struct IniFileSource {
    filename: PathBuf,
    entries: Vec<(String, String)>,
}

impl ConfigurationSource for IniFileSource {
    fn filename(&self) -> &Path {
        &self.filename
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}
