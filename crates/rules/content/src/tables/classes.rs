//! Class table: attack and save progressions.
//!
//! Class rows carry progression *kinds*; this module expands a kind into
//! the cumulative value at a class level using the standard stepped
//! formulas. The rules core never sees the kinds, only the expanded
//! numbers through the [`ClassOracle`] lookups.

use std::collections::HashMap;

use rules_core::{BaseSaves, ClassId, ClassOracle};
use serde::{Deserialize, Serialize};

/// Base-attack progression a class advances on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackProgression {
    /// One point per level (martial classes).
    Full,
    /// Three points per four levels.
    ThreeQuarters,
    /// One point per two levels (pure casters).
    Half,
}

impl AttackProgression {
    /// Cumulative attack bonus at a class level.
    pub fn value(self, level: u8) -> i32 {
        let level = i32::from(level);
        match self {
            Self::Full => level,
            Self::ThreeQuarters => level * 3 / 4,
            Self::Half => level / 2,
        }
    }
}

/// Saving-throw progression for one save of one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveProgression {
    /// Strong save: starts at +2 and gains a point every two levels.
    Good,
    /// Weak save: one point per three levels.
    Poor,
}

impl SaveProgression {
    /// Cumulative base save at a class level. Level 0 grants nothing,
    /// including the Good-save starting bonus.
    pub fn value(self, level: u8) -> i32 {
        let level = i32::from(level);
        match self {
            Self::Good => {
                if level == 0 {
                    0
                } else {
                    2 + level / 2
                }
            }
            Self::Poor => level / 3,
        }
    }
}

/// One row of the class table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    pub attack: AttackProgression,
    pub fortitude: SaveProgression,
    pub reflex: SaveProgression,
    pub will: SaveProgression,
}

/// In-memory class table implementing [`ClassOracle`].
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    entries: HashMap<ClassId, ClassEntry>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ClassId, entry: ClassEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ClassId, ClassEntry)> for ClassTable {
    fn from_iter<I: IntoIterator<Item = (ClassId, ClassEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl ClassOracle for ClassTable {
    fn base_attack_bonus(&self, class: ClassId, level: u8) -> Option<i32> {
        self.entries.get(&class).map(|entry| entry.attack.value(level))
    }

    fn base_saves(&self, class: ClassId, level: u8) -> Option<BaseSaves> {
        self.entries.get(&class).map(|entry| BaseSaves {
            fortitude: entry.fortitude.value(level),
            reflex: entry.reflex.value(level),
            will: entry.will.value(level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_progression_spot_values() {
        assert_eq!(AttackProgression::Full.value(1), 1);
        assert_eq!(AttackProgression::Full.value(20), 20);
        assert_eq!(AttackProgression::ThreeQuarters.value(1), 0);
        assert_eq!(AttackProgression::ThreeQuarters.value(4), 3);
        assert_eq!(AttackProgression::ThreeQuarters.value(20), 15);
        assert_eq!(AttackProgression::Half.value(1), 0);
        assert_eq!(AttackProgression::Half.value(4), 2);
        assert_eq!(AttackProgression::Half.value(20), 10);
    }

    #[test]
    fn save_progression_spot_values() {
        assert_eq!(SaveProgression::Good.value(1), 2);
        assert_eq!(SaveProgression::Good.value(2), 3);
        assert_eq!(SaveProgression::Good.value(20), 12);
        assert_eq!(SaveProgression::Poor.value(1), 0);
        assert_eq!(SaveProgression::Poor.value(3), 1);
        assert_eq!(SaveProgression::Poor.value(20), 6);
    }

    #[test]
    fn level_zero_grants_nothing() {
        assert_eq!(AttackProgression::Full.value(0), 0);
        assert_eq!(SaveProgression::Good.value(0), 0);
        assert_eq!(SaveProgression::Poor.value(0), 0);
    }

    #[test]
    fn unknown_class_yields_none() {
        let table = ClassTable::new();
        assert_eq!(table.base_attack_bonus(ClassId(1), 5), None);
        assert_eq!(table.base_saves(ClassId(1), 5), None);
    }
}
