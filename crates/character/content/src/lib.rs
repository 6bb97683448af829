//! Data-driven rule content and loaders.
//!
//! This crate reads static rule data into the snapshot types of
//! `character-core`:
//! - Race baselines (data-driven via RON)
//! - Properties by fate (data-driven via RON)
//! - Profession first-level modifiers (data-driven via RON)
//! - Rule tables (data-driven via RON)
//! - Rules configuration (data-driven via TOML)
//!
//! Content is consumed through the snapshot oracles and never appears in the
//! derived first-level properties.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FateLoader, LoadResult, ProfessionLoader, RaceLoader,
    TablesLoader,
};
