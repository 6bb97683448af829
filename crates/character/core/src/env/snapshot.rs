//! Oracle snapshots and adapters backed by static data.
//!
//! This module provides serializable snapshots of rule data and adapter
//! implementations of the oracle traits that read from them.
//!
//! # Design
//!
//! - **Snapshots**: Serializable structures that capture oracle data
//! - **Adapters**: Implement oracle traits by borrowing a snapshot
//! - **Missing data**: race and profession entries are mandatory, fate
//!   entries default to no bonus

use std::collections::BTreeMap;

use super::{FateOracle, OracleError, ProfessionOracle, RaceOracle, TablesOracle};
use crate::codes::GenderCode;
use crate::properties::{BaseProperty, BasePropertyKind, Height, HeightInCm};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Race baselines that differ between genders.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenderedRaceSnapshot {
    pub base_properties: BTreeMap<BasePropertyKind, i32>,
    pub weight_in_kg: f64,
    pub size: i32,
}

impl GenderedRaceSnapshot {
    pub fn new(
        base_properties: BTreeMap<BasePropertyKind, i32>,
        weight_in_kg: f64,
        size: i32,
    ) -> Self {
        Self {
            base_properties,
            weight_in_kg,
            size,
        }
    }

    #[must_use]
    pub fn with_property(mut self, kind: BasePropertyKind, value: i32) -> Self {
        self.base_properties.insert(kind, value);
        self
    }
}

/// Snapshot of a race: one baseline set per gender plus the shared height.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaceSnapshot {
    pub male: GenderedRaceSnapshot,
    pub female: GenderedRaceSnapshot,
    pub height_in_cm: f64,
}

impl RaceSnapshot {
    pub fn new(
        male: GenderedRaceSnapshot,
        female: GenderedRaceSnapshot,
        height_in_cm: f64,
    ) -> Self {
        Self {
            male,
            female,
            height_in_cm,
        }
    }

    pub fn for_gender(&self, gender: GenderCode) -> &GenderedRaceSnapshot {
        match gender {
            GenderCode::Male => &self.male,
            GenderCode::Female => &self.female,
        }
    }

    /// Creates a race snapshot from a RaceOracle implementation.
    ///
    /// Kinds the oracle does not know are left out, so the snapshot reports
    /// them as unknown as well.
    pub fn from_oracle(oracle: &dyn RaceOracle, tables: &dyn TablesOracle) -> Self {
        let capture = |gender: GenderCode| {
            let base_properties = BasePropertyKind::ALL
                .into_iter()
                .filter_map(|kind| {
                    oracle
                        .base_property(kind, gender, tables)
                        .ok()
                        .map(|value| (kind, value))
                })
                .collect();
            GenderedRaceSnapshot::new(
                base_properties,
                oracle.weight_in_kg(gender, tables),
                oracle.size(gender, tables),
            )
        };

        Self::new(
            capture(GenderCode::Male),
            capture(GenderCode::Female),
            oracle.height_in_cm(tables),
        )
    }
}

/// Snapshot of the properties distributed by fate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FateSnapshot {
    pub properties: BTreeMap<BasePropertyKind, i32>,
}

impl FateSnapshot {
    pub fn new(properties: BTreeMap<BasePropertyKind, i32>) -> Self {
        Self { properties }
    }

    #[must_use]
    pub fn with_property(mut self, kind: BasePropertyKind, value: i32) -> Self {
        self.properties.insert(kind, value);
        self
    }

    pub fn from_oracle(oracle: &dyn FateOracle) -> Self {
        let properties = BasePropertyKind::ALL
            .into_iter()
            .map(|kind| (kind, oracle.property(kind).value()))
            .collect();
        Self::new(properties)
    }
}

/// Snapshot of the first-level profession modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfessionSnapshot {
    pub first_level_modifiers: BTreeMap<BasePropertyKind, i32>,
}

impl ProfessionSnapshot {
    pub fn new(first_level_modifiers: BTreeMap<BasePropertyKind, i32>) -> Self {
        Self {
            first_level_modifiers,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, kind: BasePropertyKind, value: i32) -> Self {
        self.first_level_modifiers.insert(kind, value);
        self
    }
}

/// One row of the height classification table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightClass {
    /// Smallest height in centimeters belonging to this class.
    pub min_cm: f64,
    pub height: i32,
}

impl HeightClass {
    pub const fn new(min_cm: f64, height: i32) -> Self {
        Self { min_cm, height }
    }
}

/// Snapshot of the rule tables the first-level rules read.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TablesSnapshot {
    pub height_classes: Vec<HeightClass>,
}

impl TablesSnapshot {
    pub fn new(height_classes: Vec<HeightClass>) -> Self {
        Self { height_classes }
    }
}

// ============================================================================
// Snapshot Adapters
// ============================================================================

/// RaceOracle backed by RaceSnapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotRaceOracle<'a> {
    snapshot: &'a RaceSnapshot,
}

impl<'a> SnapshotRaceOracle<'a> {
    pub fn new(snapshot: &'a RaceSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<'a> RaceOracle for SnapshotRaceOracle<'a> {
    fn base_property(
        &self,
        kind: BasePropertyKind,
        gender: GenderCode,
        _tables: &dyn TablesOracle,
    ) -> Result<i32, OracleError> {
        self.snapshot
            .for_gender(gender)
            .base_properties
            .get(&kind)
            .copied()
            .ok_or(OracleError::UnknownPropertyKind(kind))
    }

    fn weight_in_kg(&self, gender: GenderCode, _tables: &dyn TablesOracle) -> f64 {
        self.snapshot.for_gender(gender).weight_in_kg
    }

    fn height_in_cm(&self, _tables: &dyn TablesOracle) -> f64 {
        self.snapshot.height_in_cm
    }

    fn size(&self, gender: GenderCode, _tables: &dyn TablesOracle) -> i32 {
        self.snapshot.for_gender(gender).size
    }
}

/// FateOracle backed by FateSnapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotFateOracle<'a> {
    snapshot: &'a FateSnapshot,
}

impl<'a> SnapshotFateOracle<'a> {
    pub fn new(snapshot: &'a FateSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<'a> FateOracle for SnapshotFateOracle<'a> {
    fn property(&self, kind: BasePropertyKind) -> BaseProperty {
        let value = self.snapshot.properties.get(&kind).copied().unwrap_or(0);
        BaseProperty::new(kind, value)
    }

    fn strength(&self) -> BaseProperty {
        self.property(BasePropertyKind::Strength)
    }
}

/// ProfessionOracle backed by ProfessionSnapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotProfessionOracle<'a> {
    snapshot: &'a ProfessionSnapshot,
}

impl<'a> SnapshotProfessionOracle<'a> {
    pub fn new(snapshot: &'a ProfessionSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<'a> ProfessionOracle for SnapshotProfessionOracle<'a> {
    fn first_level_property_modifier(&self, kind: BasePropertyKind) -> Result<i32, OracleError> {
        self.snapshot
            .first_level_modifiers
            .get(&kind)
            .copied()
            .ok_or(OracleError::UnknownPropertyKind(kind))
    }

    fn first_level_strength_modifier(&self) -> i32 {
        self.snapshot
            .first_level_modifiers
            .get(&BasePropertyKind::Strength)
            .copied()
            .unwrap_or(0)
    }
}

/// TablesOracle backed by TablesSnapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotTablesOracle<'a> {
    snapshot: &'a TablesSnapshot,
}

impl<'a> SnapshotTablesOracle<'a> {
    pub fn new(snapshot: &'a TablesSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<'a> TablesOracle for SnapshotTablesOracle<'a> {
    /// Class of the tallest row not above `height_in_cm`. Heights below every
    /// row fall into the lowest class; an empty table classifies as 0.
    fn height(&self, height_in_cm: HeightInCm) -> Height {
        let classes = &self.snapshot.height_classes;
        let reached = classes
            .iter()
            .filter(|class| class.min_cm <= height_in_cm.value())
            .max_by(|a, b| a.min_cm.total_cmp(&b.min_cm));
        let class =
            reached.or_else(|| classes.iter().min_by(|a, b| a.min_cm.total_cmp(&b.min_cm)));

        Height(class.map_or(0, |class| class.height))
    }
}
