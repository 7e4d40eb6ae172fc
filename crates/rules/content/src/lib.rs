//! Data-driven lookup tables and their loaders.
//!
//! This crate turns game-data files into the oracle implementations
//! `rules-core` consumes:
//! - Race table (ability adjustments, data-driven via RON)
//! - Appearance table (size categories, data-driven via RON)
//! - Class table (attack/save progressions, data-driven via RON)
//! - Item catalog (data-driven via RON)
//! - Editor configuration (data-driven via TOML)
//!
//! Tables are immutable once loaded; mutable state lives in the creature
//! model owned by the edit session.

pub mod factory;
pub mod loaders;
pub mod tables;

pub use factory::{ContentFactory, LoadedContent};
pub use loaders::{
    AppearanceLoader, ClassLoader, ConfigLoader, ItemLoader, LoadResult, RaceLoader,
};
pub use tables::{
    AppearanceEntry, AppearanceTable, AttackProgression, ClassEntry, ClassTable, ItemCatalog,
    OracleBundle, RaceEntry, RaceTable, SaveProgression,
};
