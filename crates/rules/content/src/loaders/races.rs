//! Race table loader.

use std::path::Path;

use rules_core::{RaceId, RacialModifiers};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::{RaceEntry, RaceTable};

/// Race table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTableSpec {
    pub races: Vec<RaceSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSpec {
    pub id: u8,
    pub name: String,
    #[serde(default)]
    pub modifiers: RacialModifiers,
}

/// Loader for the race table from RON files.
pub struct RaceLoader;

impl RaceLoader {
    /// Load the race table from a RON file.
    pub fn load(path: &Path) -> LoadResult<RaceTable> {
        Self::parse(&read_file(path)?)
    }

    /// Parse a race table from RON text.
    pub fn parse(content: &str) -> LoadResult<RaceTable> {
        let spec: RaceTableSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse race table RON: {}", e))?;

        Ok(spec
            .races
            .into_iter()
            .map(|race| {
                (
                    RaceId(race.id),
                    RaceEntry {
                        name: race.name,
                        modifiers: race.modifiers,
                    },
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::RaceOracle;

    #[test]
    fn parses_race_rows_with_partial_modifiers() {
        let table = RaceLoader::parse(
            r#"(
                races: [
                    (id: 0, name: "Human"),
                    (id: 1, name: "Elf", modifiers: (dexterity: 2, constitution: -2)),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.racial_modifiers(RaceId(0)), Some(RacialModifiers::ZERO));

        let elf = table.racial_modifiers(RaceId(1)).unwrap();
        assert_eq!(elf.dexterity, 2);
        assert_eq!(elf.constitution, -2);
        assert_eq!(elf.strength, 0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(RaceLoader::parse("(races: oops)").is_err());
    }
}
