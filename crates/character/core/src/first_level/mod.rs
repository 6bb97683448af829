//! First-level properties of a newly created character.
//!
//! # Derivation
//!
//! ```text
//! [ race baseline ] + [ fate ] + [ profession level 1 ]
//!      ↓
//! [ unlimited base property ]
//!      ↓  min(unlimited, race baseline + increase limit)
//! [ first-level base property ]
//! ```
//!
//! Body properties are derived next to them: weight and height in
//! centimeters are race baselines moved by caller adjustments, the height
//! class comes from the tables, size follows the strength gained from fate
//! and profession, and age is taken as given.
//!
//! Everything is computed once in [`FirstLevelProperties::new`]; the result
//! is an immutable snapshot.

mod base;
mod body;
mod error;
mod summary;

pub use base::{FirstLevelValue, InvalidFirstLevelValue};
pub use body::size_modifier_by_strength;
pub use error::FirstLevelError;
pub use summary::FirstLevelSummary;

use crate::codes::GenderCode;
use crate::env::{FateOracle, PropertiesEnv};
use crate::error::RulesError;
use crate::properties::{
    Age, BaseProperty, BasePropertyKind, BasePropertyMap, Height, HeightInCm, Size, WeightInKg,
};

/// Caller-chosen body parameters of a new character.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyParameters {
    pub weight_in_kg_adjustment: WeightInKg,
    pub height_in_cm_adjustment: HeightInCm,
    pub age: Age,
}

impl BodyParameters {
    pub const fn new(
        weight_in_kg_adjustment: WeightInKg,
        height_in_cm_adjustment: HeightInCm,
        age: Age,
    ) -> Self {
        Self {
            weight_in_kg_adjustment,
            height_in_cm_adjustment,
            age,
        }
    }
}

/// Frozen first-level properties of a character.
#[derive(Clone)]
pub struct FirstLevelProperties<'a> {
    properties_by_fate: &'a dyn FateOracle,
    base_properties: BasePropertyMap<FirstLevelValue>,
    weight_in_kg_adjustment: WeightInKg,
    weight_in_kg: WeightInKg,
    size: Size,
    height_in_cm_adjustment: HeightInCm,
    height_in_cm: HeightInCm,
    height: Height,
    age: Age,
}

impl<'a> FirstLevelProperties<'a> {
    /// Derives all first-level properties at once.
    ///
    /// # Errors
    ///
    /// - `FirstLevelError::InvalidConfig` if the environment carries a
    ///   negative increase limit
    /// - `FirstLevelError::Oracle` if race or profession data does not know
    ///   one of the base properties
    /// - `FirstLevelError::InvalidStrengthAdjustment` if fate and profession
    ///   together give a negative strength adjustment
    pub fn new(
        env: &PropertiesEnv<'a>,
        gender: GenderCode,
        body: BodyParameters,
    ) -> Result<Self, FirstLevelError> {
        Self::derive(env, gender, body).inspect_err(|err| {
            let severity = err.severity();
            if severity.is_internal() {
                tracing::error!(
                    %gender,
                    %severity,
                    code = err.error_code(),
                    %err,
                    "first level derivation aborted"
                );
            } else {
                tracing::warn!(
                    %gender,
                    %severity,
                    code = err.error_code(),
                    %err,
                    "first level derivation rejected"
                );
            }
        })
    }

    fn derive(
        env: &PropertiesEnv<'a>,
        gender: GenderCode,
        body: BodyParameters,
    ) -> Result<Self, FirstLevelError> {
        env.config().validate()?;
        let base_properties = base::derive_base_properties(env, gender)?;
        let weight_in_kg = body::derive_weight_in_kg(env, gender, body.weight_in_kg_adjustment);
        let size = body::derive_size(env, gender)?;
        let height_in_cm = body::derive_height_in_cm(env, body.height_in_cm_adjustment);
        let height = env.tables().height(height_in_cm);

        tracing::debug!(
            %gender,
            size = size.value(),
            height = height.value(),
            "first level properties derived"
        );

        Ok(Self {
            properties_by_fate: env.fate(),
            base_properties,
            weight_in_kg_adjustment: body.weight_in_kg_adjustment,
            weight_in_kg,
            size,
            height_in_cm_adjustment: body.height_in_cm_adjustment,
            height_in_cm,
            height,
            age: body.age,
        })
    }

    pub fn properties_by_fate(&self) -> &'a dyn FateOracle {
        self.properties_by_fate
    }

    /// First-level value of a base property, after the limit.
    pub fn property(&self, kind: BasePropertyKind) -> BaseProperty {
        BaseProperty::new(kind, self.base_properties.get(kind).limited())
    }

    /// First-level value of a base property, before the limit.
    pub fn unlimited_property(&self, kind: BasePropertyKind) -> BaseProperty {
        BaseProperty::new(kind, self.base_properties.get(kind).unlimited())
    }

    /// How much of a base property the first-level limit took away (0+).
    pub fn loss_because_of_limit(&self, kind: BasePropertyKind) -> i32 {
        self.base_properties.get(kind).loss_because_of_limit()
    }

    pub fn base_properties(&self) -> &BasePropertyMap<FirstLevelValue> {
        &self.base_properties
    }

    pub fn strength(&self) -> BaseProperty {
        self.property(BasePropertyKind::Strength)
    }

    pub fn agility(&self) -> BaseProperty {
        self.property(BasePropertyKind::Agility)
    }

    pub fn knack(&self) -> BaseProperty {
        self.property(BasePropertyKind::Knack)
    }

    pub fn will(&self) -> BaseProperty {
        self.property(BasePropertyKind::Will)
    }

    pub fn intelligence(&self) -> BaseProperty {
        self.property(BasePropertyKind::Intelligence)
    }

    pub fn charisma(&self) -> BaseProperty {
        self.property(BasePropertyKind::Charisma)
    }

    pub fn unlimited_strength(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Strength)
    }

    pub fn unlimited_agility(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Agility)
    }

    pub fn unlimited_knack(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Knack)
    }

    pub fn unlimited_will(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Will)
    }

    pub fn unlimited_intelligence(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Intelligence)
    }

    pub fn unlimited_charisma(&self) -> BaseProperty {
        self.unlimited_property(BasePropertyKind::Charisma)
    }

    pub fn strength_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Strength)
    }

    pub fn agility_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Agility)
    }

    pub fn knack_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Knack)
    }

    pub fn will_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Will)
    }

    pub fn intelligence_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Intelligence)
    }

    pub fn charisma_loss_because_of_limit(&self) -> i32 {
        self.loss_because_of_limit(BasePropertyKind::Charisma)
    }

    pub fn weight_in_kg_adjustment(&self) -> WeightInKg {
        self.weight_in_kg_adjustment
    }

    pub fn weight_in_kg(&self) -> WeightInKg {
        self.weight_in_kg
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn height_in_cm_adjustment(&self) -> HeightInCm {
        self.height_in_cm_adjustment
    }

    pub fn height_in_cm(&self) -> HeightInCm {
        self.height_in_cm
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn age(&self) -> Age {
        self.age
    }

    /// Copies every derived value out of the borrowed derivation.
    pub fn summary(&self) -> FirstLevelSummary {
        FirstLevelSummary {
            base_properties: self.base_properties,
            weight_in_kg_adjustment: self.weight_in_kg_adjustment,
            weight_in_kg: self.weight_in_kg,
            size: self.size,
            height_in_cm_adjustment: self.height_in_cm_adjustment,
            height_in_cm: self.height_in_cm,
            height: self.height,
            age: self.age,
        }
    }
}

impl core::fmt::Debug for FirstLevelProperties<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FirstLevelProperties")
            .field("base_properties", &self.base_properties)
            .field("weight_in_kg", &self.weight_in_kg)
            .field("size", &self.size)
            .field("height_in_cm", &self.height_in_cm)
            .field("height", &self.height)
            .field("age", &self.age)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, PropertiesConfig};
    use crate::env::{
        FateSnapshot, GenderedRaceSnapshot, HeightClass, ProfessionSnapshot, RaceSnapshot,
        SnapshotFateOracle, SnapshotProfessionOracle, SnapshotRaceOracle, SnapshotTablesOracle,
        TablesSnapshot,
    };

    fn human() -> RaceSnapshot {
        let male = BasePropertyKind::ALL
            .into_iter()
            .fold(GenderedRaceSnapshot::new(Default::default(), 70.0, 0), |race, kind| {
                race.with_property(kind, 0)
            });
        let female = male
            .clone()
            .with_property(BasePropertyKind::Strength, -1)
            .with_property(BasePropertyKind::Charisma, 1);

        RaceSnapshot::new(male, GenderedRaceSnapshot { weight_in_kg: 56.0, size: -1, ..female }, 180.0)
    }

    fn profession(strength: i32) -> ProfessionSnapshot {
        BasePropertyKind::ALL
            .into_iter()
            .fold(ProfessionSnapshot::default(), |profession, kind| {
                profession.with_modifier(kind, 0)
            })
            .with_modifier(BasePropertyKind::Strength, strength)
    }

    fn tables() -> TablesSnapshot {
        TablesSnapshot::new(vec![HeightClass::new(0.0, -1), HeightClass::new(175.0, 0)])
    }

    #[test]
    fn female_baselines_are_used_for_female() {
        let race = human();
        let fate = FateSnapshot::default().with_property(BasePropertyKind::Strength, 1);
        let profession = profession(1);
        let tables = tables();
        let (race, fate, profession, tables) = (
            SnapshotRaceOracle::new(&race),
            SnapshotFateOracle::new(&fate),
            SnapshotProfessionOracle::new(&profession),
            SnapshotTablesOracle::new(&tables),
        );
        let env = PropertiesEnv::new(&race, &fate, &profession, &tables);

        let properties = FirstLevelProperties::new(
            &env,
            GenderCode::Female,
            BodyParameters::new(WeightInKg(4.0), HeightInCm(-10.0), Age(18)),
        )
        .unwrap();

        // -1 (race) + 1 (fate) + 1 (profession)
        assert_eq!(properties.strength().value(), 1);
        assert_eq!(properties.charisma().value(), 1);
        assert_eq!(properties.weight_in_kg(), WeightInKg(60.0));
        // -1 (race) + 1 (adjustment 2)
        assert_eq!(properties.size(), Size(0));
        assert_eq!(properties.height_in_cm(), HeightInCm(170.0));
        assert_eq!(properties.height(), Height(-1));
        assert_eq!(properties.age(), Age(18));
    }

    #[test]
    fn keeps_fate_for_later_retrieval() {
        let race = human();
        let fate = FateSnapshot::default().with_property(BasePropertyKind::Will, 2);
        let profession = profession(1);
        let tables = tables();
        let (race, fate_oracle, profession, tables) = (
            SnapshotRaceOracle::new(&race),
            SnapshotFateOracle::new(&fate),
            SnapshotProfessionOracle::new(&profession),
            SnapshotTablesOracle::new(&tables),
        );
        let env = PropertiesEnv::new(&race, &fate_oracle, &profession, &tables);

        let properties =
            FirstLevelProperties::new(&env, GenderCode::Male, BodyParameters::default()).unwrap();

        assert_eq!(
            properties.properties_by_fate().property(BasePropertyKind::Will),
            BaseProperty::new(BasePropertyKind::Will, 2)
        );
    }

    #[test]
    fn configured_limit_replaces_default() {
        let race = human();
        let fate = FateSnapshot::default().with_property(BasePropertyKind::Knack, 3);
        let profession = profession(1);
        let tables = tables();
        let (race, fate, profession, tables) = (
            SnapshotRaceOracle::new(&race),
            SnapshotFateOracle::new(&fate),
            SnapshotProfessionOracle::new(&profession),
            SnapshotTablesOracle::new(&tables),
        );
        let env = PropertiesEnv::new(&race, &fate, &profession, &tables)
            .with_config(PropertiesConfig::with_first_level_increase_limit(2));

        let properties =
            FirstLevelProperties::new(&env, GenderCode::Male, BodyParameters::default()).unwrap();

        assert_eq!(properties.unlimited_knack().value(), 3);
        assert_eq!(properties.knack().value(), 2);
        assert_eq!(properties.knack_loss_because_of_limit(), 1);
        assert_eq!(properties.summary().total_loss_because_of_limit(), 1);
    }

    #[test]
    fn negative_configured_limit_aborts_derivation() {
        let race = human();
        let fate = FateSnapshot::default().with_property(BasePropertyKind::Strength, 1);
        let profession = profession(1);
        let tables = tables();
        let (race, fate, profession, tables) = (
            SnapshotRaceOracle::new(&race),
            SnapshotFateOracle::new(&fate),
            SnapshotProfessionOracle::new(&profession),
            SnapshotTablesOracle::new(&tables),
        );
        let env = PropertiesEnv::new(&race, &fate, &profession, &tables)
            .with_config(PropertiesConfig::with_first_level_increase_limit(-1));

        let err = FirstLevelProperties::new(&env, GenderCode::Male, BodyParameters::default())
            .unwrap_err();

        assert_eq!(
            err,
            FirstLevelError::InvalidConfig(ConfigError::NegativeIncreaseLimit(-1))
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn derived_properties_can_cross_threads() {
        assert_send_sync::<FirstLevelProperties<'static>>();
        assert_send_sync::<PropertiesEnv<'static>>();
        assert_send_sync::<FirstLevelSummary>();
    }
}
