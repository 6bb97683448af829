use crate::properties::{BaseProperty, BasePropertyKind};

/// Properties distributed by fate at character creation.
///
/// Rolling them is someone else's business; the first-level rules only read
/// the outcome.
pub trait FateOracle: Send + Sync {
    fn property(&self, kind: BasePropertyKind) -> BaseProperty;

    /// Strength by fate, queried on its own for the body size change.
    fn strength(&self) -> BaseProperty;
}
