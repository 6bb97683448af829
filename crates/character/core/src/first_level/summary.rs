use super::FirstLevelValue;
use crate::properties::{Age, BasePropertyMap, Height, HeightInCm, Size, WeightInKg};

/// Owned copy of every first-level value, detached from the collaborators
/// the derivation borrowed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstLevelSummary {
    pub base_properties: BasePropertyMap<FirstLevelValue>,
    pub weight_in_kg_adjustment: WeightInKg,
    pub weight_in_kg: WeightInKg,
    pub size: Size,
    pub height_in_cm_adjustment: HeightInCm,
    pub height_in_cm: HeightInCm,
    pub height: Height,
    pub age: Age,
}

impl FirstLevelSummary {
    /// Sum of everything the first-level limit took away.
    pub fn total_loss_because_of_limit(&self) -> i32 {
        self.base_properties
            .iter()
            .map(|(_, value)| value.loss_because_of_limit())
            .sum()
    }
}
