use super::{OracleError, TablesOracle};
use crate::codes::GenderCode;
use crate::properties::BasePropertyKind;

/// Oracle describing a race (and subrace) of the rule book.
///
/// Base properties, weight and size have a baseline per gender, height in
/// centimeters is shared.
pub trait RaceOracle: Send + Sync {
    /// Racial baseline of a base property.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownPropertyKind` if the race data has no
    /// entry for `kind`.
    fn base_property(
        &self,
        kind: BasePropertyKind,
        gender: GenderCode,
        tables: &dyn TablesOracle,
    ) -> Result<i32, OracleError>;

    fn weight_in_kg(&self, gender: GenderCode, tables: &dyn TablesOracle) -> f64;

    fn height_in_cm(&self, tables: &dyn TablesOracle) -> f64;

    fn size(&self, gender: GenderCode, tables: &dyn TablesOracle) -> i32;
}
