//! Common error infrastructure for character-core.
//!
//! Domain-specific errors live next to the code that raises them
//! ([`crate::env::OracleError`] for rule data lookups,
//! [`crate::first_level::FirstLevelError`] for the derivation itself).
//! This module provides the classification shared by all of them.

/// How a caller should react to a failed derivation.
///
/// Displayed as its snake_case name, so log fields and error reports
/// carry `validation` or `fatal` rather than the variant path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Another, still valid input may succeed.
    Recoverable,
    /// Rule data or configuration must be fixed first.
    Validation,
    /// Collaborating components disagree with each other.
    Internal,
    /// A rule was broken; character creation for this input is over.
    Fatal,
}

impl ErrorSeverity {
    /// Whether the failure points at broken upstream data or a bug rather
    /// than at data the caller can correct.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification shared by every error raised while deriving properties.
///
/// Error enums derive `thiserror::Error` for their messages and implement
/// this trait so that callers and log events can tell a data problem from
/// a broken rule without matching on concrete variants.
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `ORACLE_UNKNOWN_PROPERTY_KIND`.
    /// Falls back to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
