//! Body properties - weight, height, size and age.
//!
//! Weight and height are measured values; size and the height class are
//! rule-book bonuses derived from them.

/// Body weight in kilograms. Also used for signed weight adjustments.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightInKg(pub f64);

impl WeightInKg {
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Body height in centimeters. Also used for signed height adjustments.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightInCm(pub f64);

impl HeightInCm {
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Height class looked up from [`HeightInCm`] in the rule tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Height(pub i32);

impl Height {
    pub const fn value(&self) -> i32 {
        self.0
    }
}

/// Body size bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32);

impl Size {
    pub const fn value(&self) -> i32 {
        self.0
    }
}

/// Age in years.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Age(pub u32);

impl Age {
    pub const fn value(&self) -> u32 {
        self.0
    }
}
