//! `.env` file loader.
//!
//! Responsibilities:
//! - Match a single exact filename (default `.env`) in a directory.
//! - Validate the whole file under dotenv line syntax before producing a
//!   source; an empty file is valid, a single bad line invalidates the file.
//!
//! Does NOT handle:
//! - Reading the process environment (out of scope for the whole workspace).
//! - Variable expansion beyond what `dotenvy` performs per line.

use std::path::{Path, PathBuf};

use crate::loader::ConfigurationLoader;
use crate::source::ConfigurationSource;

/// Loads an exact-named dotenv file from a directory.
#[derive(Debug, Clone)]
pub struct EnvFileLoader {
    filename: String,
}

impl Default for EnvFileLoader {
    fn default() -> Self {
        Self {
            filename: ".env".to_string(),
        }
    }
}

impl EnvFileLoader {
    /// Create a loader for the conventional `.env` filename.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the filename to match (e.g. `.env.test`).
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    fn parse(&self, path: &Path) -> Option<EnvFileSource> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping unreadable env file");
                return None;
            }
        };

        // Last assignment wins on duplicate keys, keeping first-seen order.
        let mut entries: Vec<(String, String)> = Vec::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
                        entry.1 = value;
                    } else {
                        entries.push((key, value));
                    }
                }
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "skipping malformed env file");
                    return None;
                }
            }
        }

        let filename = std::path::absolute(path).ok()?;
        Some(EnvFileSource { filename, entries })
    }
}

impl ConfigurationLoader for EnvFileLoader {
    fn scan(&self, directory: &Path) -> Vec<Box<dyn ConfigurationSource>> {
        let path = directory.join(&self.filename);
        if !path.is_file() {
            return Vec::new();
        }
        match self.parse(&path) {
            Some(source) => vec![Box::new(source)],
            None => Vec::new(),
        }
    }
}

/// A validated dotenv file.
#[derive(Debug, Clone)]
pub struct EnvFileSource {
    filename: PathBuf,
    entries: Vec<(String, String)>,
}

impl ConfigurationSource for EnvFileSource {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan(dir: &Path) -> Vec<Box<dyn ConfigurationSource>> {
        EnvFileLoader::new().scan(dir)
    }

    #[test]
    fn test_missing_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(scan(dir.path()).is_empty());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "").unwrap();

        let sources = scan(dir.path());
        assert_eq!(sources.len(), 1);
        assert!(sources[0].keys().is_empty());
    }

    #[test]
    fn test_parses_keys_in_file_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            "DATABASE_URL=postgres://localhost/app\nDEBUG=true\n",
        )
        .unwrap();

        let sources = scan(dir.path());
        assert_eq!(sources.len(), 1);
        assert_eq!(
            sources[0].get("DATABASE_URL"),
            Some("postgres://localhost/app")
        );
        assert_eq!(sources[0].keys(), vec!["DATABASE_URL", "DEBUG"]);
        assert!(sources[0].contains("DEBUG"));
        assert!(!sources[0].contains("MISSING"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "KEY=first\nKEY=second\n").unwrap();

        let sources = scan(dir.path());
        assert_eq!(sources[0].get("KEY"), Some("second"));
        assert_eq!(sources[0].keys().len(), 1);
    }

    #[test]
    fn test_malformed_line_invalidates_whole_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "GOOD=1\nnot a valid line\n").unwrap();

        assert!(scan(dir.path()).is_empty());
    }

    #[test]
    fn test_filename_is_absolute() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "A=1\n").unwrap();

        let sources = scan(dir.path());
        assert!(sources[0].filename().is_absolute());
        assert!(sources[0].filename().ends_with(".env"));
    }

    #[test]
    fn test_custom_filename() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.test"), "A=1\n").unwrap();
        fs::write(dir.path().join(".env"), "A=2\n").unwrap();

        let sources = EnvFileLoader::new()
            .with_filename(".env.test")
            .scan(dir.path());
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].get("A"), Some("1"));
    }

    #[test]
    fn test_directory_named_like_env_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".env")).unwrap();

        assert!(scan(dir.path()).is_empty());
    }
}
