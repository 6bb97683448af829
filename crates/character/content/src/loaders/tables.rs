//! Rule tables loader.

use std::path::Path;

use character_core::TablesSnapshot;

use crate::loaders::{LoadResult, load_ron};

/// Loader for the rule tables the first-level rules read.
///
/// # File Format
///
/// ```ron
/// (
///     height_classes: [
///         (min_cm: 0.0, height: -1),
///         (min_cm: 175.0, height: 0),
///         (min_cm: 185.0, height: 1),
///     ],
/// )
/// ```
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<TablesSnapshot> {
        load_ron(path, "tables")
    }
}
