//! Configuration file loaders for layerconf.
//!
//! This crate provides the loader capability contract used by the discovery
//! engine, plus the two built-in implementations covering `.env` files and
//! INI-style `*.ini` / `*.cfg` files.

mod env;
mod ini;
mod loader;
mod source;

pub use env::{EnvFileLoader, EnvFileSource};
pub use ini::{DEFAULT_SECTION, IniFileLoader, IniFileSource};
pub use loader::ConfigurationLoader;
pub use source::ConfigurationSource;
