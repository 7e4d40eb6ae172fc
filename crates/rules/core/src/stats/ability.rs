//! Ability scores - Layer 1 of the derived-stat system.
//!
//! The six base scores are the Single Source of Truth and the only ability
//! values that are stored. Racial adjustments come from the race lookup and
//! are applied before modifier calculation; modifiers are never stored.
//!
//! modifier = floor((base + racial - 10) / 2)

use crate::config::EditorConfig;

/// The six abilities that define a creature.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Conventional three-letter abbreviation used on character sheets.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

/// Stored base ability scores.
///
/// Unsigned 8-bit per the creature file format. The model enforces no
/// lower bound; callers may store 0 and the arithmetic stays defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AbilityScores {
    pub fn new(
        strength: u8,
        dexterity: u8,
        constitution: u8,
        intelligence: u8,
        wisdom: u8,
        charisma: u8,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: u8) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }
}

impl Default for AbilityScores {
    /// Default scores: all 10 (modifier 0 across the board).
    fn default() -> Self {
        let s = EditorConfig::DEFAULT_ABILITY_SCORE;
        Self::new(s, s, s, s, s, s)
    }
}

/// Signed per-ability offsets supplied by the race lookup.
///
/// Immutable once obtained for a given race id. A missing race lookup
/// degrades to [`RacialModifiers::ZERO`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RacialModifiers {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl RacialModifiers {
    /// Neutral adjustments (the degraded-collaborator default).
    pub const ZERO: Self = Self {
        strength: 0,
        dexterity: 0,
        constitution: 0,
        intelligence: 0,
        wisdom: 0,
        charisma: 0,
    };

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// Calculate the modifier for a total (base + racial) ability score.
///
/// Uses floor division, not truncation: odd totals below 10 round toward
/// negative infinity, matching the printed 3rd-edition modifier table.
///
/// Examples:
/// - 7 → -2 (truncating division would give -1)
/// - 8-9 → -1
/// - 10-11 → 0
/// - 12-13 → +1
/// - 20 → +5
pub fn ability_modifier(total_score: i32) -> i32 {
    (total_score - 10).div_euclid(2)
}

/// All six ability modifiers computed in one pass.
///
/// NOT stored - always recomputed from base scores + racial adjustments
/// when an ability or race edit lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityModifiers {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityModifiers {
    /// Compute modifiers from base scores and racial adjustments.
    pub fn compute(scores: &AbilityScores, racial: &RacialModifiers) -> Self {
        let m = |ability| ability_modifier(i32::from(scores.get(ability)) + racial.get(ability));
        Self {
            strength: m(Ability::Strength),
            dexterity: m(Ability::Dexterity),
            constitution: m(Ability::Constitution),
            intelligence: m(Ability::Intelligence),
            wisdom: m(Ability::Wisdom),
            charisma: m(Ability::Charisma),
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn modifier_spot_values() {
        let table = [
            (8, -1),
            (9, -1),
            (10, 0),
            (11, 0),
            (12, 1),
            (13, 1),
            (18, 4),
            (19, 4),
            (20, 5),
        ];
        for (score, expected) in table {
            assert_eq!(ability_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn modifier_uses_floor_division_for_odd_negative_differences() {
        // floor(-3 / 2) = -2; truncation toward zero would give -1
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(5), -3);
        // -2 / 2 = -1 exactly, floor and truncation agree
        assert_eq!(ability_modifier(8), -1);
        // score 0 is representable even though conventionally unused
        assert_eq!(ability_modifier(0), -5);
    }

    #[test]
    fn modifier_matches_closed_form_over_conventional_range() {
        for score in 1..=50 {
            let expected = ((score as f64 - 10.0) / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn racial_adjustments_shift_the_modifier() {
        let scores = AbilityScores::default();
        let racial = RacialModifiers {
            dexterity: 2,
            constitution: -2,
            ..RacialModifiers::ZERO
        };

        let mods = AbilityModifiers::compute(&scores, &racial);

        assert_eq!(mods.dexterity, 1); // (10 + 2 - 10) / 2 = 1
        assert_eq!(mods.constitution, -1); // (10 - 2 - 10) / 2 = -1
        assert_eq!(mods.strength, 0);
    }

    #[test]
    fn compute_is_idempotent() {
        let scores = AbilityScores::new(18, 14, 13, 8, 7, 6);
        let racial = RacialModifiers::ZERO;

        let first = AbilityModifiers::compute(&scores, &racial);
        let second = AbilityModifiers::compute(&scores, &racial);

        assert_eq!(first, second);
    }

    #[test]
    fn get_and_set_round_trip_every_ability() {
        let mut scores = AbilityScores::default();
        for (i, ability) in Ability::iter().enumerate() {
            scores.set(ability, 10 + i as u8);
            assert_eq!(scores.get(ability), 10 + i as u8);
        }
    }
}
