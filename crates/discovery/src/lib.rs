//! Upward configuration file discovery for layerconf.
//!
//! This crate locates layered configuration by walking ancestor directories
//! from a starting path toward a bounding root, trying a set of pluggable
//! loaders in each directory and settling on the first directory that yields
//! at least one validated source.

mod builder;
mod engine;
mod error;

pub use builder::DiscoveryBuilder;
pub use engine::ConfigurationDiscovery;
pub use error::DiscoveryError;
