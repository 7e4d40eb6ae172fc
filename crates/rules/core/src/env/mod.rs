//! Traits describing read-only game data.
//!
//! Oracles expose the lookup tables the derived-stat computations depend
//! on: racial ability adjustments, appearance size categories, class
//! progressions, and the item catalog. The [`Env`] aggregate bundles them
//! so recomputation code can access everything it needs without hard
//! coupling to concrete implementations.
//!
//! Every oracle is optional. The recompute path never fails on a missing
//! collaborator: the degrading accessors on [`Env`] substitute the
//! documented neutral value (zero offsets, zero progression, no equipment
//! bonus) instead. The `Result`-returning accessors exist for callers
//! that genuinely require a table, such as panels listing its rows.

mod appearance;
mod classes;
mod error;
mod items;
mod races;

pub use appearance::{AppearanceOracle, SizeCategory};
pub use classes::ClassOracle;
pub use error::OracleError;
pub use items::{ItemDefinition, ItemKind, ItemOracle, ItemProperty};
pub use races::RaceOracle;

use crate::ids::{AppearanceId, ClassId, ItemHandle, RaceId};
use crate::stats::{BaseSaves, RacialModifiers};

/// Aggregates the read-only oracles consumed by stat recomputation.
#[derive(Clone, Copy, Default)]
pub struct Env<'a> {
    races: Option<&'a dyn RaceOracle>,
    appearances: Option<&'a dyn AppearanceOracle>,
    classes: Option<&'a dyn ClassOracle>,
    items: Option<&'a dyn ItemOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        races: Option<&'a dyn RaceOracle>,
        appearances: Option<&'a dyn AppearanceOracle>,
        classes: Option<&'a dyn ClassOracle>,
        items: Option<&'a dyn ItemOracle>,
    ) -> Self {
        Self {
            races,
            appearances,
            classes,
            items,
        }
    }

    pub fn with_all(
        races: &'a dyn RaceOracle,
        appearances: &'a dyn AppearanceOracle,
        classes: &'a dyn ClassOracle,
        items: &'a dyn ItemOracle,
    ) -> Self {
        Self::new(Some(races), Some(appearances), Some(classes), Some(items))
    }

    /// An environment with no collaborators; every lookup degrades to its
    /// neutral value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the RaceOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RacesNotAvailable` if no race oracle was provided.
    pub fn races(&self) -> Result<&'a dyn RaceOracle, OracleError> {
        self.races.ok_or(OracleError::RacesNotAvailable)
    }

    /// Returns the AppearanceOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AppearancesNotAvailable` if no appearance
    /// oracle was provided.
    pub fn appearances(&self) -> Result<&'a dyn AppearanceOracle, OracleError> {
        self.appearances.ok_or(OracleError::AppearancesNotAvailable)
    }

    /// Returns the ClassOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClassesNotAvailable` if no class oracle was provided.
    pub fn classes(&self) -> Result<&'a dyn ClassOracle, OracleError> {
        self.classes.ok_or(OracleError::ClassesNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    // ===== degrading lookups used by the recompute path =====

    /// Racial ability adjustments; zero offsets when the oracle is absent
    /// or the race id is unknown.
    pub fn racial_modifiers(&self, race: RaceId) -> RacialModifiers {
        self.races
            .and_then(|oracle| oracle.racial_modifiers(race))
            .unwrap_or(RacialModifiers::ZERO)
    }

    /// Armor-class size offset; 0 when the oracle is absent or the
    /// appearance id is unknown.
    pub fn size_modifier(&self, appearance: AppearanceId) -> i32 {
        self.appearances
            .and_then(|oracle| oracle.size(appearance))
            .map(SizeCategory::ac_modifier)
            .unwrap_or(0)
    }

    /// Cumulative base attack bonus for a class at a level; 0 when the
    /// oracle is absent or the class id is unknown.
    pub fn base_attack_bonus(&self, class: ClassId, level: u8) -> i32 {
        self.classes
            .and_then(|oracle| oracle.base_attack_bonus(class, level))
            .unwrap_or(0)
    }

    /// Cumulative base saves for a class at a level; zeroes when the
    /// oracle is absent or the class id is unknown.
    pub fn base_saves(&self, class: ClassId, level: u8) -> BaseSaves {
        self.classes
            .and_then(|oracle| oracle.base_saves(class, level))
            .unwrap_or(BaseSaves::ZERO)
    }

    /// Attack-affecting bonus total on an item; 0 when the oracle is
    /// absent or the handle does not resolve.
    pub fn item_attack_bonus(&self, handle: ItemHandle) -> i32 {
        self.items
            .and_then(|oracle| oracle.definition(handle))
            .map(|definition| definition.attack_bonus())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("races", &self.races.is_some())
            .field("appearances", &self.appearances.is_some())
            .field("classes", &self.classes.is_some())
            .field("items", &self.items.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_degrades_every_lookup_to_neutral() {
        let env = Env::empty();

        assert_eq!(env.racial_modifiers(RaceId(1)), RacialModifiers::ZERO);
        assert_eq!(env.size_modifier(AppearanceId(3)), 0);
        assert_eq!(env.base_attack_bonus(ClassId(4), 10), 0);
        assert_eq!(env.base_saves(ClassId(4), 10), BaseSaves::ZERO);
        assert_eq!(env.item_attack_bonus(ItemHandle(9)), 0);
    }

    #[test]
    fn required_accessors_report_missing_oracles() {
        let env = Env::empty();

        assert_eq!(env.races().unwrap_err(), OracleError::RacesNotAvailable);
        assert_eq!(env.items().unwrap_err(), OracleError::ItemsNotAvailable);
    }
}
