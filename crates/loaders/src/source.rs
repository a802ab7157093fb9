//! The contract exposed by a validated configuration file.

use std::path::Path;

/// A configuration file that was located and fully parsed.
///
/// Instances are produced by a [`ConfigurationLoader`](crate::ConfigurationLoader)
/// and hand out flat key/value data; resolving a key across multiple sources
/// is the caller's concern.
pub trait ConfigurationSource {
    /// Absolute path of the file backing this source.
    fn filename(&self) -> &Path;

    /// Look up a single key.
    fn get(&self, key: &str) -> Option<&str>;

    /// Keys recognized by this source, in file order where the format
    /// preserves it.
    fn keys(&self) -> Vec<&str>;

    /// Whether this source defines `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
