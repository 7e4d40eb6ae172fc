//! In-memory lookup tables implementing the rules-core oracle traits.

mod appearances;
mod classes;
mod items;
mod races;

pub use appearances::{AppearanceEntry, AppearanceTable};
pub use classes::{AttackProgression, ClassEntry, ClassTable, SaveProgression};
pub use items::ItemCatalog;
pub use races::{RaceEntry, RaceTable};

use rules_core::Env;

/// Owns every lookup table and lends them out as a rules-core [`Env`].
#[derive(Clone, Debug, Default)]
pub struct OracleBundle {
    pub races: RaceTable,
    pub appearances: AppearanceTable,
    pub classes: ClassTable,
    pub items: ItemCatalog,
}

impl OracleBundle {
    pub fn new(
        races: RaceTable,
        appearances: AppearanceTable,
        classes: ClassTable,
        items: ItemCatalog,
    ) -> Self {
        Self {
            races,
            appearances,
            classes,
            items,
        }
    }

    /// Borrows every table as an environment for stat recomputation.
    pub fn as_env(&self) -> Env<'_> {
        Env::with_all(&self.races, &self.appearances, &self.classes, &self.items)
    }
}
