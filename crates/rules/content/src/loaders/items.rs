//! Item catalog loader.

use std::path::Path;

use rules_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::ItemCatalog;

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogSpec {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let spec: ItemCatalogSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(spec.items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{ItemHandle, ItemOracle};

    #[test]
    fn parses_items_with_properties() {
        let catalog = ItemLoader::parse(
            r#"(
                items: [
                    (
                        handle: 100,
                        name: "Longsword +1",
                        kind: Weapon,
                        properties: [EnhancementBonus(1)],
                    ),
                    (handle: 101, name: "Padded Armor", kind: Armor),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.definition(ItemHandle(100)).unwrap().attack_bonus(),
            1
        );
        assert_eq!(
            catalog.definition(ItemHandle(101)).unwrap().attack_bonus(),
            0
        );
    }
}
