//! Race loader.

use std::path::Path;

use character_core::RaceSnapshot;

use crate::loaders::{LoadResult, load_ron};

/// Loader for race baselines from RON files.
///
/// # File Format
///
/// ```ron
/// (
///     male: (
///         base_properties: { strength: 0, agility: 0, knack: 0, will: 0, intelligence: 0, charisma: 0 },
///         weight_in_kg: 70.0,
///         size: 0,
///     ),
///     female: (
///         base_properties: { strength: -1, agility: 0, knack: 0, will: 0, intelligence: 0, charisma: 1 },
///         weight_in_kg: 57.0,
///         size: -1,
///     ),
///     height_in_cm: 180.0,
/// )
/// ```
pub struct RaceLoader;

impl RaceLoader {
    pub fn load(path: &Path) -> LoadResult<RaceSnapshot> {
        load_ron(path, "race")
    }
}
