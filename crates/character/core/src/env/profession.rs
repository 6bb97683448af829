use super::OracleError;
use crate::properties::BasePropertyKind;

/// Profession progression of a character.
pub trait ProfessionOracle: Send + Sync {
    /// Bonus the first profession level adds to a base property.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownPropertyKind` if the profession data has
    /// no entry for `kind`.
    fn first_level_property_modifier(&self, kind: BasePropertyKind) -> Result<i32, OracleError>;

    fn first_level_strength_modifier(&self) -> i32;
}
