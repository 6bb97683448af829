//! First-level derivation scenarios driven through snapshot oracles.

use character_core::env::{GenderedRaceSnapshot, HeightClass};
use character_core::{
    Age, BasePropertyKind, BodyParameters, ErrorSeverity, FateSnapshot, FirstLevelError,
    FirstLevelProperties, FirstLevelSummary, GenderCode, HeightInCm, OracleError,
    ProfessionSnapshot, PropertiesEnv, RaceSnapshot, RulesError, Size, SnapshotFateOracle,
    SnapshotProfessionOracle, SnapshotRaceOracle, SnapshotTablesOracle, TablesSnapshot,
    WeightInKg,
};

/// Static rule data for one character creation.
struct Fixture {
    race: RaceSnapshot,
    fate: FateSnapshot,
    profession: ProfessionSnapshot,
    tables: TablesSnapshot,
}

impl Fixture {
    /// Every race baseline 10, weight 80 kg, size 2, height 180 cm; no fate
    /// bonus and no profession modifiers.
    fn new() -> Self {
        let gendered = BasePropertyKind::ALL.into_iter().fold(
            GenderedRaceSnapshot::new(Default::default(), 80.0, 2),
            |race, kind| race.with_property(kind, 10),
        );
        let profession = BasePropertyKind::ALL
            .into_iter()
            .fold(ProfessionSnapshot::default(), |profession, kind| {
                profession.with_modifier(kind, 0)
            });

        Self {
            race: RaceSnapshot::new(gendered.clone(), gendered, 180.0),
            fate: FateSnapshot::default(),
            profession,
            tables: TablesSnapshot::new(vec![
                HeightClass::new(0.0, -1),
                HeightClass::new(175.0, 0),
                HeightClass::new(185.0, 1),
            ]),
        }
    }

    fn fate(mut self, kind: BasePropertyKind, value: i32) -> Self {
        self.fate = self.fate.with_property(kind, value);
        self
    }

    fn profession(mut self, kind: BasePropertyKind, value: i32) -> Self {
        self.profession = self.profession.with_modifier(kind, value);
        self
    }

    fn derive(&self, body: BodyParameters) -> Result<FirstLevelSummary, FirstLevelError> {
        let race = SnapshotRaceOracle::new(&self.race);
        let fate = SnapshotFateOracle::new(&self.fate);
        let profession = SnapshotProfessionOracle::new(&self.profession);
        let tables = SnapshotTablesOracle::new(&self.tables);
        let env = PropertiesEnv::new(&race, &fate, &profession, &tables);

        FirstLevelProperties::new(&env, GenderCode::Male, body).map(|properties| properties.summary())
    }

    fn derive_default(&self) -> Result<FirstLevelSummary, FirstLevelError> {
        self.derive(BodyParameters::default())
    }
}

#[test]
fn strength_within_limit_is_not_lost() {
    let summary = Fixture::new()
        .fate(BasePropertyKind::Strength, 2)
        .derive_default()
        .unwrap();

    let strength = summary.base_properties.get(BasePropertyKind::Strength);
    assert_eq!(strength.unlimited(), 12);
    assert_eq!(strength.limited(), 12);
    assert_eq!(strength.loss_because_of_limit(), 0);
}

#[test]
fn strength_above_limit_is_clamped() {
    let summary = Fixture::new()
        .fate(BasePropertyKind::Strength, 5)
        .profession(BasePropertyKind::Strength, 1)
        .derive_default()
        .unwrap();

    let strength = summary.base_properties.get(BasePropertyKind::Strength);
    assert_eq!(strength.unlimited(), 16);
    // Limit: 10 (race) + 3
    assert_eq!(strength.limited(), 13);
    assert_eq!(strength.loss_because_of_limit(), 3);
}

#[test]
fn every_property_sums_race_fate_and_profession() {
    let summary = Fixture::new()
        .fate(BasePropertyKind::Strength, 1)
        .fate(BasePropertyKind::Agility, 3)
        .fate(BasePropertyKind::Knack, -2)
        .fate(BasePropertyKind::Will, 4)
        .fate(BasePropertyKind::Intelligence, 2)
        .profession(BasePropertyKind::Agility, 1)
        .profession(BasePropertyKind::Will, 1)
        .profession(BasePropertyKind::Charisma, 2)
        .derive_default()
        .unwrap();

    let expected_unlimited = [
        (BasePropertyKind::Strength, 11),
        (BasePropertyKind::Agility, 14),
        (BasePropertyKind::Knack, 8),
        (BasePropertyKind::Will, 15),
        (BasePropertyKind::Intelligence, 12),
        (BasePropertyKind::Charisma, 12),
    ];
    for (kind, unlimited) in expected_unlimited {
        let value = summary.base_properties.get(kind);
        assert_eq!(value.unlimited(), unlimited, "{kind}");
        assert!(value.limited() <= value.unlimited(), "{kind}");
        assert!(value.limited() <= 13, "{kind}");
        assert_eq!(value.limited(), unlimited.min(13), "{kind}");
        assert_eq!(value.loss_because_of_limit(), unlimited - value.limited(), "{kind}");
    }
    assert_eq!(summary.total_loss_because_of_limit(), 1 + 2);
}

#[test]
fn size_shrinks_without_strength_adjustment() {
    let summary = Fixture::new().derive_default().unwrap();

    // 2 (race) - 1
    assert_eq!(summary.size, Size(1));
}

#[test]
fn size_ignores_race_strength() {
    let mut fixture = Fixture::new().fate(BasePropertyKind::Strength, 1);
    fixture.race.male = fixture
        .race
        .male
        .clone()
        .with_property(BasePropertyKind::Strength, 15);

    let summary = fixture.derive_default().unwrap();

    assert_eq!(summary.base_properties.get(BasePropertyKind::Strength).limited(), 16);
    assert_eq!(summary.size, Size(2));
}

#[test]
fn size_uses_unlimited_strength_adjustment() {
    let summary = Fixture::new()
        .fate(BasePropertyKind::Strength, 4)
        .profession(BasePropertyKind::Strength, 1)
        .derive_default()
        .unwrap();

    assert_eq!(summary.size, Size(3));
}

#[test]
fn negative_strength_adjustment_aborts_creation() {
    let err = Fixture::new()
        .fate(BasePropertyKind::Strength, -1)
        .derive_default()
        .unwrap_err();

    assert_eq!(err, FirstLevelError::InvalidStrengthAdjustment(-1));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
}

#[test]
fn unknown_race_property_is_surfaced_unchanged() {
    let mut fixture = Fixture::new();
    fixture
        .race
        .male
        .base_properties
        .remove(&BasePropertyKind::Intelligence);

    let err = fixture.derive_default().unwrap_err();

    assert_eq!(
        err,
        FirstLevelError::Oracle(OracleError::UnknownPropertyKind(
            BasePropertyKind::Intelligence
        ))
    );
}

#[test]
fn unknown_profession_property_is_surfaced_unchanged() {
    let mut fixture = Fixture::new();
    fixture
        .profession
        .first_level_modifiers
        .remove(&BasePropertyKind::Charisma);

    let err = fixture.derive_default().unwrap_err();

    assert_eq!(
        err,
        FirstLevelError::Oracle(OracleError::UnknownPropertyKind(BasePropertyKind::Charisma))
    );
    assert_eq!(err.error_code(), "ORACLE_UNKNOWN_PROPERTY_KIND");
}

#[test]
fn body_adjustments_move_race_baselines() {
    let fixture = Fixture::new().fate(BasePropertyKind::Strength, 1);

    for adjustment in [-10.0, 0.0, 10.0] {
        let summary = fixture
            .derive(BodyParameters::new(
                WeightInKg(adjustment),
                HeightInCm(adjustment),
                Age(25),
            ))
            .unwrap();

        assert_eq!(summary.weight_in_kg, WeightInKg(80.0 + adjustment));
        assert_eq!(summary.weight_in_kg_adjustment, WeightInKg(adjustment));
        assert_eq!(summary.height_in_cm, HeightInCm(180.0 + adjustment));
        assert_eq!(summary.height_in_cm_adjustment, HeightInCm(adjustment));
        assert_eq!(summary.age, Age(25));
    }
}

#[test]
fn height_class_follows_adjusted_height() {
    let fixture = Fixture::new().fate(BasePropertyKind::Strength, 1);

    let short = fixture
        .derive(BodyParameters::new(WeightInKg(0.0), HeightInCm(-10.0), Age(20)))
        .unwrap();
    let tall = fixture
        .derive(BodyParameters::new(WeightInKg(0.0), HeightInCm(10.0), Age(20)))
        .unwrap();

    assert_eq!(short.height.value(), -1);
    assert_eq!(tall.height.value(), 1);
}

#[test]
fn identical_inputs_give_identical_properties() {
    let fixture = Fixture::new()
        .fate(BasePropertyKind::Strength, 3)
        .fate(BasePropertyKind::Will, 5)
        .profession(BasePropertyKind::Intelligence, 1);
    let body = BodyParameters::new(WeightInKg(-3.5), HeightInCm(4.0), Age(31));

    let first = fixture.derive(body).unwrap();
    let second = fixture.derive(body).unwrap();

    assert_eq!(first, second);
}
