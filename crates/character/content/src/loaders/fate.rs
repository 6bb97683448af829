//! Properties-by-fate loader.

use std::path::Path;

use character_core::FateSnapshot;

use crate::loaders::{LoadResult, load_ron};

/// Loader for properties distributed by fate.
///
/// Kinds left out of the file carry no fate bonus.
pub struct FateLoader;

impl FateLoader {
    pub fn load(path: &Path) -> LoadResult<FateSnapshot> {
        load_ron(path, "fate")
    }
}
