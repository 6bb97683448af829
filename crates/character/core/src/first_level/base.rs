//! Base property derivation and the first-level limit.
//!
//! unlimited = race + fate + profession
//! limited   = min(unlimited, race + increase limit)

use crate::codes::GenderCode;
use crate::env::{OracleError, PropertiesEnv};
use crate::properties::BasePropertyMap;

/// A base property before and after the first-level limit.
///
/// Only [`FirstLevelValue::limited_by`] builds one, so the limited value
/// never exceeds the unlimited one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoredFirstLevelValue"))]
pub struct FirstLevelValue {
    unlimited: i32,
    limited: i32,
}

impl FirstLevelValue {
    /// Clamps `unlimited` to `limit`. Values at or below the limit pass
    /// through untouched.
    pub const fn limited_by(unlimited: i32, limit: i32) -> Self {
        let limited = if unlimited > limit { limit } else { unlimited };
        Self { unlimited, limited }
    }

    pub const fn unlimited(&self) -> i32 {
        self.unlimited
    }

    pub const fn limited(&self) -> i32 {
        self.limited
    }

    /// What the limit took away, never negative.
    pub const fn loss_because_of_limit(&self) -> i32 {
        self.unlimited - self.limited
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn checked(unlimited: i32, limited: i32) -> Result<Self, InvalidFirstLevelValue> {
        if limited > unlimited {
            return Err(InvalidFirstLevelValue { unlimited, limited });
        }
        Ok(Self::limited_by(unlimited, limited))
    }
}

/// A stored first-level value whose limited part exceeds the unlimited one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("limited value {limited} exceeds unlimited value {unlimited}")]
pub struct InvalidFirstLevelValue {
    pub unlimited: i32,
    pub limited: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredFirstLevelValue {
    unlimited: i32,
    limited: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredFirstLevelValue> for FirstLevelValue {
    type Error = InvalidFirstLevelValue;

    fn try_from(stored: StoredFirstLevelValue) -> Result<Self, Self::Error> {
        Self::checked(stored.unlimited, stored.limited)
    }
}

pub(crate) fn derive_base_properties(
    env: &PropertiesEnv<'_>,
    gender: GenderCode,
) -> Result<BasePropertyMap<FirstLevelValue>, OracleError> {
    let increase_limit = env.config().first_level_increase_limit;

    BasePropertyMap::try_from_fn(|kind| {
        let race_value = env.race().base_property(kind, gender, env.tables())?;
        let unlimited = race_value
            + env.fate().property(kind).value()
            + env.profession().first_level_property_modifier(kind)?;
        let limit = race_value + increase_limit;
        let value = FirstLevelValue::limited_by(unlimited, limit);

        if value.loss_because_of_limit() > 0 {
            tracing::trace!(%kind, unlimited, limit, "first level property clamped");
        }

        Ok(value)
    })
}
