//! Base properties - the six attributes every character is built from.

use strum::EnumCount;

/// The six base properties of a character.
///
/// - **Strength**: physical power, carrying capacity, body size change
/// - **Agility**: physical speed and dexterity
/// - **Knack**: fine motor skill and handiness
/// - **Will**: mental fortitude
/// - **Intelligence**: reasoning and memory
/// - **Charisma**: force of personality
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BasePropertyKind {
    Strength,
    Agility,
    Knack,
    Will,
    Intelligence,
    Charisma,
}

impl BasePropertyKind {
    /// Every kind, in rule-book order.
    pub const ALL: [BasePropertyKind; BasePropertyKind::COUNT] = [
        Self::Strength,
        Self::Agility,
        Self::Knack,
        Self::Will,
        Self::Intelligence,
        Self::Charisma,
    ];

    /// Position of this kind in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Agility => 1,
            Self::Knack => 2,
            Self::Will => 3,
            Self::Intelligence => 4,
            Self::Charisma => 5,
        }
    }
}

/// A base property value tagged with its kind.
///
/// # Design Pattern: Value Object
/// Properties are immutable. Deriving a new value keeps the kind, so a
/// Strength stays a Strength whatever arithmetic produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseProperty {
    kind: BasePropertyKind,
    value: i32,
}

impl BaseProperty {
    pub const fn new(kind: BasePropertyKind, value: i32) -> Self {
        Self { kind, value }
    }

    pub const fn kind(&self) -> BasePropertyKind {
        self.kind
    }

    pub const fn value(&self) -> i32 {
        self.value
    }
}

/// Values indexed by [`BasePropertyKind`], one slot per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasePropertyMap<T>([T; BasePropertyKind::COUNT]);

impl<T> BasePropertyMap<T> {
    /// Fills the map in rule-book order, stopping at the first error.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(BasePropertyKind) -> Result<T, E>,
    ) -> Result<Self, E>
    where
        T: Default,
    {
        let mut values: [T; BasePropertyKind::COUNT] = Default::default();
        for kind in BasePropertyKind::ALL {
            values[kind.index()] = f(kind)?;
        }
        Ok(Self(values))
    }

    pub fn get(&self, kind: BasePropertyKind) -> &T {
        &self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BasePropertyKind, &T)> {
        BasePropertyKind::ALL.into_iter().zip(self.0.iter())
    }
}
