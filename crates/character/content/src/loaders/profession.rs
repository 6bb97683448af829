//! Profession loader.

use std::path::Path;

use character_core::ProfessionSnapshot;

use crate::loaders::{LoadResult, load_ron};

/// Loader for first-level profession modifiers.
pub struct ProfessionLoader;

impl ProfessionLoader {
    pub fn load(path: &Path) -> LoadResult<ProfessionSnapshot> {
        load_ron(path, "profession")
    }
}
