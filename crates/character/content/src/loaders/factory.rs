//! Content factory for building snapshots from data files.

use std::path::{Path, PathBuf};

use character_core::{
    FateSnapshot, ProfessionSnapshot, PropertiesConfig, RaceSnapshot, TablesSnapshot,
};

use crate::loaders::{
    ConfigLoader, FateLoader, LoadResult, ProfessionLoader, RaceLoader, TablesLoader,
};

/// Content factory that loads rule content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// ├── races/
/// │   ├── common_human.ron
/// │   └── mountain_dwarf.ron
/// ├── professions/
/// │   └── fighter.ron
/// └── fates/
///     └── <character>.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules configuration from `config.toml`.
    ///
    /// A data directory without `config.toml` uses the default rules.
    pub fn load_config(&self) -> LoadResult<PropertiesConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules config, using defaults");
            return Ok(PropertiesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load rule tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<TablesSnapshot> {
        TablesLoader::load(&self.data_dir.join("tables.ron"))
    }

    /// Load a race from `races/<name>.ron`.
    pub fn load_race(&self, name: &str) -> LoadResult<RaceSnapshot> {
        RaceLoader::load(&self.entry_path("races", name))
    }

    /// Load a profession from `professions/<name>.ron`.
    pub fn load_profession(&self, name: &str) -> LoadResult<ProfessionSnapshot> {
        ProfessionLoader::load(&self.entry_path("professions", name))
    }

    /// Load properties by fate from `fates/<name>.ron`.
    pub fn load_fate(&self, name: &str) -> LoadResult<FateSnapshot> {
        FateLoader::load(&self.entry_path("fates", name))
    }

    fn entry_path(&self, dir: &str, name: &str) -> PathBuf {
        self.data_dir.join(dir).join(format!("{name}.ron"))
    }
}
