use crate::properties::{Height, HeightInCm};

/// Oracle providing rule-book tables.
///
/// Races receive this handle for their own lookups and never expose what
/// they read from it. The only table the first-level rules query directly is
/// the height classification.
pub trait TablesOracle: Send + Sync {
    fn height(&self, height_in_cm: HeightInCm) -> Height;
}
