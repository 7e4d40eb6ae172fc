//! Class table loader.

use std::path::Path;

use rules_core::ClassId;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::{AttackProgression, ClassEntry, ClassTable, SaveProgression};

/// Class table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTableSpec {
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSpec {
    pub id: i32,
    pub name: String,
    pub attack: AttackProgression,
    pub fortitude: SaveProgression,
    pub reflex: SaveProgression,
    pub will: SaveProgression,
}

/// Loader for the class table from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class table from a RON file.
    pub fn load(path: &Path) -> LoadResult<ClassTable> {
        Self::parse(&read_file(path)?)
    }

    /// Parse a class table from RON text.
    pub fn parse(content: &str) -> LoadResult<ClassTable> {
        let spec: ClassTableSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class table RON: {}", e))?;

        Ok(spec
            .classes
            .into_iter()
            .map(|class| {
                (
                    ClassId(class.id),
                    ClassEntry {
                        name: class.name,
                        attack: class.attack,
                        fortitude: class.fortitude,
                        reflex: class.reflex,
                        will: class.will,
                    },
                )
            })
            .collect())
    }
}
