//! Appearance table: appearance rows to size categories.

use std::collections::HashMap;

use rules_core::{AppearanceId, AppearanceOracle, SizeCategory};

/// One row of the appearance table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppearanceEntry {
    pub name: String,
    pub size: SizeCategory,
}

/// In-memory appearance table implementing [`AppearanceOracle`].
#[derive(Clone, Debug, Default)]
pub struct AppearanceTable {
    entries: HashMap<AppearanceId, AppearanceEntry>,
}

impl AppearanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AppearanceId, entry: AppearanceEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: AppearanceId) -> Option<&AppearanceEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(AppearanceId, AppearanceEntry)> for AppearanceTable {
    fn from_iter<I: IntoIterator<Item = (AppearanceId, AppearanceEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AppearanceOracle for AppearanceTable {
    fn size(&self, appearance: AppearanceId) -> Option<SizeCategory> {
        self.entries.get(&appearance).map(|entry| entry.size)
    }
}
