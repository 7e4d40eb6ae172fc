//! Saving throws.
//!
//! Each save is a class-table base summed across class levels plus the
//! governing ability modifier: Fortitude/Constitution, Reflex/Dexterity,
//! Will/Wisdom.

use crate::creature::ClassList;
use crate::env::Env;
use crate::stats::AbilityModifiers;

/// Cumulative base saves a class grants at a given level.
///
/// Supplied by the class oracle; the core only sums these across the
/// creature's class slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseSaves {
    pub fortitude: i32,
    pub reflex: i32,
    pub will: i32,
}

impl BaseSaves {
    /// Neutral base (degraded-collaborator default).
    pub const ZERO: Self = Self {
        fortitude: 0,
        reflex: 0,
        will: 0,
    };
}

/// Final saving throws after ability modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavingThrows {
    pub fortitude: i32,
    pub reflex: i32,
    pub will: i32,
}

/// Compute the three saving throws for a creature.
pub fn compute(classes: &ClassList, modifiers: &AbilityModifiers, env: &Env<'_>) -> SavingThrows {
    let base = classes
        .entries()
        .iter()
        .map(|entry| env.base_saves(entry.class, entry.level))
        .fold(BaseSaves::ZERO, |acc, saves| BaseSaves {
            fortitude: acc.fortitude + saves.fortitude,
            reflex: acc.reflex + saves.reflex,
            will: acc.will + saves.will,
        });

    SavingThrows {
        fortitude: base.fortitude + modifiers.constitution,
        reflex: base.reflex + modifiers.dexterity,
        will: base.will + modifiers.wisdom,
    }
}
