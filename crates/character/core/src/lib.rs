//! Deterministic first-level property derivation for DrD+ characters.
//!
//! `character-core` turns a race, a gender, the properties rolled by fate,
//! the profession levels and a handful of body adjustments into the frozen
//! set of first-level properties of a freshly created character.
//! Rule data is reached only through the read-only oracles in [`env`], and
//! every derivation flows through [`FirstLevelProperties::new`].
pub mod codes;
pub mod config;
pub mod env;
pub mod error;
pub mod first_level;
pub mod properties;

pub use codes::GenderCode;
pub use config::{ConfigError, PropertiesConfig};
pub use env::{
    FateOracle, FateSnapshot, OracleError, ProfessionOracle, ProfessionSnapshot, PropertiesEnv,
    RaceOracle, RaceSnapshot, SnapshotFateOracle, SnapshotProfessionOracle, SnapshotRaceOracle,
    SnapshotTablesOracle, TablesOracle, TablesSnapshot,
};
pub use error::{ErrorSeverity, RulesError};
pub use first_level::{
    BodyParameters, FirstLevelError, FirstLevelProperties, FirstLevelSummary, FirstLevelValue,
    InvalidFirstLevelValue, size_modifier_by_strength,
};
pub use properties::{
    Age, BaseProperty, BasePropertyKind, BasePropertyMap, Height, HeightInCm, Size, WeightInKg,
};
