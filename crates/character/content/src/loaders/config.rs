//! Rules configuration loader.

use std::path::Path;

use anyhow::Context;

use character_core::PropertiesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults. Values the rules can
    /// not work with are rejected here, naming the file.
    pub fn load(path: &Path) -> LoadResult<PropertiesConfig> {
        let content = read_file(path)?;
        let config: PropertiesConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid rules config {}", path.display()))?;

        Ok(config)
    }
}
