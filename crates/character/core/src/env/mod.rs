//! Traits describing read-only rule data.
//!
//! Oracles expose race baselines, fate rolls, profession modifiers and rule
//! tables. The [`PropertiesEnv`] aggregate bundles them so the first-level
//! derivation can reach everything it needs without hard coupling to
//! concrete implementations.
mod error;
mod fate;
mod profession;
mod race;
mod snapshot;
mod tables;

pub use error::OracleError;
pub use fate::FateOracle;
pub use profession::ProfessionOracle;
pub use race::RaceOracle;
pub use snapshot::{
    FateSnapshot, GenderedRaceSnapshot, HeightClass, ProfessionSnapshot, RaceSnapshot,
    SnapshotFateOracle, SnapshotProfessionOracle, SnapshotRaceOracle, SnapshotTablesOracle,
    TablesSnapshot,
};
pub use tables::TablesOracle;

use crate::config::PropertiesConfig;

/// Aggregates the read-only collaborators of a character creation.
#[derive(Clone, Copy)]
pub struct PropertiesEnv<'a> {
    race: &'a dyn RaceOracle,
    fate: &'a dyn FateOracle,
    profession: &'a dyn ProfessionOracle,
    tables: &'a dyn TablesOracle,
    config: PropertiesConfig,
}

impl<'a> PropertiesEnv<'a> {
    pub fn new(
        race: &'a dyn RaceOracle,
        fate: &'a dyn FateOracle,
        profession: &'a dyn ProfessionOracle,
        tables: &'a dyn TablesOracle,
    ) -> Self {
        Self {
            race,
            fate,
            profession,
            tables,
            config: PropertiesConfig::default(),
        }
    }

    /// Replaces the default rules configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: PropertiesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn race(&self) -> &'a dyn RaceOracle {
        self.race
    }

    pub fn fate(&self) -> &'a dyn FateOracle {
        self.fate
    }

    pub fn profession(&self) -> &'a dyn ProfessionOracle {
        self.profession
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    pub fn config(&self) -> PropertiesConfig {
        self.config
    }
}

impl core::fmt::Debug for PropertiesEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertiesEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
