//! Codes identifying rule-book variants that are not properties themselves.

/// Gender of a character.
///
/// Races carry separate baselines per gender for base properties, weight
/// and size. Height in centimeters is shared by both genders.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GenderCode {
    #[default]
    Male,
    Female,
}
