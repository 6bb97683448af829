//! Oracle access errors.

use crate::error::{ErrorSeverity, RulesError};
use crate::properties::BasePropertyKind;

/// Errors that occur when querying rule data.
///
/// Oracle errors indicate a mismatch between the property enumeration and
/// the data source answering for it. They are surfaced unchanged to the
/// caller of the derivation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// The data source has no entry for the requested property kind.
    #[error("unknown property code '{0}'")]
    UnknownPropertyKind(BasePropertyKind),
}

impl RulesError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::UnknownPropertyKind(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::UnknownPropertyKind(_) => "ORACLE_UNKNOWN_PROPERTY_KIND",
        }
    }
}
