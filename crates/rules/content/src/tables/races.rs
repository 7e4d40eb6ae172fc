//! Race table: per-race ability adjustments.

use std::collections::HashMap;

use rules_core::{RaceId, RaceOracle, RacialModifiers};

/// One row of the race table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceEntry {
    pub name: String,
    pub modifiers: RacialModifiers,
}

/// In-memory race table implementing [`RaceOracle`].
#[derive(Clone, Debug, Default)]
pub struct RaceTable {
    entries: HashMap<RaceId, RaceEntry>,
}

impl RaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: RaceId, entry: RaceEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: RaceId) -> Option<&RaceEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RaceId, RaceEntry)> for RaceTable {
    fn from_iter<I: IntoIterator<Item = (RaceId, RaceEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl RaceOracle for RaceTable {
    fn racial_modifiers(&self, race: RaceId) -> Option<RacialModifiers> {
        self.entries.get(&race).map(|entry| entry.modifiers)
    }
}
