//! Item catalog.

use std::collections::HashMap;

use rules_core::{ItemDefinition, ItemHandle, ItemOracle};

/// In-memory item catalog implementing [`ItemOracle`].
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    entries: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: ItemDefinition) {
        self.entries.insert(definition.handle, definition);
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.entries.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ItemDefinition> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.entries.get(&handle).cloned()
    }
}
