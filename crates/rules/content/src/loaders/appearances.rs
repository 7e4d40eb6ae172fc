//! Appearance table loader.

use std::path::Path;

use rules_core::{AppearanceId, SizeCategory};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::{AppearanceEntry, AppearanceTable};

/// Appearance table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceTableSpec {
    pub appearances: Vec<AppearanceSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceSpec {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub size: SizeCategory,
}

/// Loader for the appearance table from RON files.
pub struct AppearanceLoader;

impl AppearanceLoader {
    /// Load the appearance table from a RON file.
    pub fn load(path: &Path) -> LoadResult<AppearanceTable> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an appearance table from RON text.
    pub fn parse(content: &str) -> LoadResult<AppearanceTable> {
        let spec: AppearanceTableSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse appearance table RON: {}", e))?;

        Ok(spec
            .appearances
            .into_iter()
            .map(|appearance| {
                (
                    AppearanceId(appearance.id),
                    AppearanceEntry {
                        name: appearance.name,
                        size: appearance.size,
                    },
                )
            })
            .collect())
    }
}
