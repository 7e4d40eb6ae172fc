//! Dirty-field tracking for recomputation batching.
//!
//! Every mutation entry point maps to the set of derived groups it
//! invalidates; the session recomputes exactly those groups, in one pass,
//! in the fixed order [`DirtyFields`] documents. During bulk population
//! the bits accumulate and a single pass runs when the scope closes.

use bitflags::bitflags;
use rules_core::Ability;

bitflags! {
    /// Derived-stat groups pending recomputation.
    ///
    /// Recompute order is fixed: modifiers first (armor class, hit
    /// points, and saves read them), then armor class, hit points,
    /// attack bonus, saves, challenge rating.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFields: u8 {
        const MODIFIERS = 1 << 0;
        const ARMOR_CLASS = 1 << 1;
        const HIT_POINTS = 1 << 2;
        const COMBAT = 1 << 3;
        const SAVES = 1 << 4;
        const CHALLENGE = 1 << 5;
    }
}

/// Groups invalidated by an edit to one ability score.
///
/// Dexterity feeds armor class and Reflex, Constitution feeds hit points
/// and Fortitude, Wisdom feeds Will. The remaining abilities only move
/// their displayed modifier.
pub(crate) fn ability_edit(ability: Ability) -> DirtyFields {
    let mut dirty = DirtyFields::MODIFIERS;
    match ability {
        Ability::Dexterity => dirty |= DirtyFields::ARMOR_CLASS | DirtyFields::SAVES,
        Ability::Constitution => dirty |= DirtyFields::HIT_POINTS | DirtyFields::SAVES,
        Ability::Wisdom => dirty |= DirtyFields::SAVES,
        Ability::Strength | Ability::Intelligence | Ability::Charisma => {}
    }
    dirty
}

/// Groups invalidated by a class-level edit.
pub(crate) fn class_edit() -> DirtyFields {
    DirtyFields::HIT_POINTS | DirtyFields::COMBAT | DirtyFields::SAVES
}

/// Groups invalidated by a race change (every modifier consumer).
pub(crate) fn race_edit() -> DirtyFields {
    DirtyFields::MODIFIERS
        | DirtyFields::ARMOR_CLASS
        | DirtyFields::HIT_POINTS
        | DirtyFields::SAVES
}
