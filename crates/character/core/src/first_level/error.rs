//! First-level derivation errors.

use crate::config::ConfigError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, RulesError};

/// Errors that abort the derivation of first-level properties.
///
/// No partially derived properties are ever returned alongside them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstLevelError {
    /// The rules configuration of the environment is unusable.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Rule data lookup failed, passed through unchanged.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Fate and profession together lowered strength, which the rules do
    /// not allow for a first-level character.
    #[error("first level strength adjustment can not be lesser than zero, given {0}")]
    InvalidStrengthAdjustment(i32),
}

impl RulesError for FirstLevelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FirstLevelError::InvalidConfig(err) => err.severity(),
            FirstLevelError::Oracle(err) => err.severity(),
            FirstLevelError::InvalidStrengthAdjustment(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            FirstLevelError::InvalidConfig(err) => err.error_code(),
            FirstLevelError::Oracle(err) => err.error_code(),
            FirstLevelError::InvalidStrengthAdjustment(_) => {
                "FIRST_LEVEL_INVALID_STRENGTH_ADJUSTMENT"
            }
        }
    }
}
