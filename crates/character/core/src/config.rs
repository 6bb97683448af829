use crate::error::{ErrorSeverity, RulesError};

/// Tunable parameters of the first-level rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropertiesConfig {
    /// How far a first-level base property may rise above the race baseline.
    /// Anything fate and profession add beyond it is lost.
    pub first_level_increase_limit: i32,
}

impl PropertiesConfig {
    // ===== runtime-tunable defaults =====
    pub const INITIAL_PROPERTY_INCREASE_LIMIT: i32 = 3;

    pub const fn new() -> Self {
        Self {
            first_level_increase_limit: Self::INITIAL_PROPERTY_INCREASE_LIMIT,
        }
    }

    pub const fn with_first_level_increase_limit(first_level_increase_limit: i32) -> Self {
        Self {
            first_level_increase_limit,
        }
    }

    /// Checks the parameters before they drive a derivation.
    ///
    /// A negative increase limit would put the limited value below the race
    /// baseline even for properties nothing was added to.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.first_level_increase_limit < 0 {
            return Err(ConfigError::NegativeIncreaseLimit(
                self.first_level_increase_limit,
            ));
        }
        Ok(())
    }
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules configuration that can not drive a derivation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("first level increase limit can not be negative, given {0}")]
    NegativeIncreaseLimit(i32),
}

impl RulesError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NegativeIncreaseLimit(_) => "CONFIG_NEGATIVE_INCREASE_LIMIT",
        }
    }
}
