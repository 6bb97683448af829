//! Body property derivation.

use super::FirstLevelError;
use crate::codes::GenderCode;
use crate::env::PropertiesEnv;
use crate::properties::{HeightInCm, Size, WeightInKg};

/// Size change caused by the first-level strength adjustment.
///
/// | adjustment | size modifier |
/// |-----------:|--------------:|
/// | 0          | -1            |
/// | 1          | 0             |
/// | 2 and more | +1            |
///
/// # Errors
///
/// A negative adjustment is invalid upstream data and yields
/// `FirstLevelError::InvalidStrengthAdjustment`.
pub fn size_modifier_by_strength(strength_adjustment: i32) -> Result<i32, FirstLevelError> {
    match strength_adjustment {
        0 => Ok(-1),
        1 => Ok(0),
        2.. => Ok(1),
        _ => Err(FirstLevelError::InvalidStrengthAdjustment(
            strength_adjustment,
        )),
    }
}

pub(crate) fn derive_size(
    env: &PropertiesEnv<'_>,
    gender: GenderCode,
) -> Result<Size, FirstLevelError> {
    // The race bonus is not counted, it does not change the size.
    let strength_adjustment =
        env.fate().strength().value() + env.profession().first_level_strength_modifier();
    let modifier = size_modifier_by_strength(strength_adjustment)?;

    Ok(Size(env.race().size(gender, env.tables()) + modifier))
}

pub(crate) fn derive_weight_in_kg(
    env: &PropertiesEnv<'_>,
    gender: GenderCode,
    adjustment: WeightInKg,
) -> WeightInKg {
    WeightInKg(env.race().weight_in_kg(gender, env.tables()) + adjustment.value())
}

pub(crate) fn derive_height_in_cm(env: &PropertiesEnv<'_>, adjustment: HeightInCm) -> HeightInCm {
    HeightInCm(env.race().height_in_cm(env.tables()) + adjustment.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_strength_adjustment_shrinks() {
        assert_eq!(size_modifier_by_strength(0), Ok(-1));
    }

    #[test]
    fn single_strength_adjustment_keeps_size() {
        assert_eq!(size_modifier_by_strength(1), Ok(0));
    }

    #[test]
    fn size_growth_saturates() {
        assert_eq!(size_modifier_by_strength(2), Ok(1));
        assert_eq!(size_modifier_by_strength(5), Ok(1));
        assert_eq!(size_modifier_by_strength(i32::MAX), Ok(1));
    }

    #[test]
    fn negative_strength_adjustment_is_rejected() {
        assert_eq!(
            size_modifier_by_strength(-1),
            Err(FirstLevelError::InvalidStrengthAdjustment(-1))
        );
    }
}
