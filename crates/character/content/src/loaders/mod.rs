//! Content loaders for reading rule data from files.
//!
//! Snapshots are stored as RON, configuration as TOML.

pub mod config;
pub mod factory;
pub mod fate;
pub mod profession;
pub mod race;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use fate::FateLoader;
pub use profession::ProfessionLoader;
pub use race::RaceLoader;
pub use tables::TablesLoader;

use std::fs;
use std::path::Path;

use anyhow::Context;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Reads a rule data file into memory.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "loading rule content");
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Reads and parses a RON file; `what` names the content in errors.
pub(crate) fn load_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .with_context(|| format!("Failed to parse {} RON {}", what, path.display()))
}
