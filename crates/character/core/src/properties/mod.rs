//! Property value objects.
//!
//! Base properties share one tagged representation ([`BaseProperty`]);
//! body properties are small newtypes so weight, height and size can never
//! be mixed up in arithmetic.

pub mod base;
pub mod body;

pub use base::{BaseProperty, BasePropertyKind, BasePropertyMap};
pub use body::{Age, Height, HeightInCm, Size, WeightInKg};
