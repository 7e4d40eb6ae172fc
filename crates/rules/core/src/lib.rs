//! Deterministic creature stat rules shared across the editor crates.
//!
//! `rules-core` defines the creature data model and the pure derived-stat
//! computations (ability modifiers, armor class, hit points, attack
//! bonus, saving throws). Game-data lookups are consumed through the
//! oracle traits in [`env`]; supporting crates depend on the types
//! re-exported here.

pub mod config;
pub mod creature;
pub mod env;
pub mod error;
pub mod ids;
pub mod stats;

pub use config::EditorConfig;
pub use creature::{
    ChallengeRating, ClassLevelEntry, ClassList, ClassSlotsFull, CreatureState, EquipSlot,
    Equipment,
};
pub use env::{
    AppearanceOracle, ClassOracle, Env, ItemDefinition, ItemKind, ItemOracle, ItemProperty,
    OracleError, RaceOracle, SizeCategory,
};
pub use error::{ErrorSeverity, RulesError};
pub use ids::{AppearanceId, ClassId, ItemHandle, RaceId};
pub use stats::{
    Ability, AbilityModifiers, AbilityScores, ArmorClass, BaseSaves, CombatStats, DerivedSheet,
    HitPoints, RacialModifiers, SavingThrows, ability_modifier, total_armor_class,
};
