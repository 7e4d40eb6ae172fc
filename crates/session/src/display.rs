//! Formatting for output consumers.
//!
//! Panels render integers from the derived sheet as short strings:
//! signed modifiers ("+3"), meters ("25/30"), and breakdown lines. All
//! formatting lives here so the rules crate stays integer-pure.

use std::fmt::Write as _;

use rules_core::{Ability, CreatureState, DerivedSheet, EditorConfig};
use strum::IntoEnumIterator;

/// Signed modifier notation: `+3`, `-1`, `+0`.
pub fn signed(value: i32) -> String {
    format!("{value:+}")
}

/// Current/maximum meter notation: `25/30`.
pub fn meter(current: i16, maximum: i16) -> String {
    format!("{current}/{maximum}")
}

/// Challenge-rating notation; whole ratings drop the fraction.
pub fn challenge_rating(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i32)
    } else {
        format!("{value:.1}")
    }
}

/// Renders the whole stat sheet as display text.
pub fn format_sheet(
    creature: &CreatureState,
    sheet: &DerivedSheet,
    config: &EditorConfig,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", creature.display_name(), creature.tag);
    let _ = writeln!(
        out,
        "Level {}  CR {}",
        creature.total_level(),
        challenge_rating(sheet.challenge_rating)
    );

    for ability in Ability::iter() {
        let _ = writeln!(
            out,
            "{} {:>3} ({})",
            ability.abbreviation(),
            creature.abilities.get(ability),
            signed(sheet.modifiers.get(ability))
        );
    }

    let ac = &sheet.armor_class;
    if config.verbose_breakdown {
        let _ = writeln!(
            out,
            "AC {} (base 10, natural {}, dex {}, size {})",
            ac.total(),
            ac.natural,
            signed(ac.dex_bonus),
            signed(ac.size_modifier)
        );
    } else {
        let _ = writeln!(out, "AC {}", ac.total());
    }

    let _ = writeln!(
        out,
        "HP {}",
        meter(sheet.hit_points.current, sheet.hit_points.maximum)
    );

    if config.verbose_breakdown {
        let _ = writeln!(
            out,
            "Attack {} (base {}, equipment {})",
            signed(sheet.combat.total_attack),
            signed(sheet.combat.base_attack),
            signed(sheet.combat.equipment_bonus)
        );
    } else {
        let _ = writeln!(out, "Attack {}", signed(sheet.combat.total_attack));
    }

    let _ = writeln!(
        out,
        "Fort {}  Ref {}  Will {}",
        signed(sheet.saves.fortitude),
        signed(sheet.saves.reflex),
        signed(sheet.saves.will)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_notation() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(-1), "-1");
        assert_eq!(signed(0), "+0");
    }

    #[test]
    fn meter_notation() {
        assert_eq!(meter(25, 30), "25/30");
    }

    #[test]
    fn challenge_rating_drops_whole_fractions() {
        assert_eq!(challenge_rating(5.0), "5");
        assert_eq!(challenge_rating(0.5), "0.5");
        assert_eq!(challenge_rating(0.0), "0");
    }

    #[test]
    fn sheet_text_is_deterministic() {
        use rules_core::Env;

        let creature = CreatureState::new("nw_goblin001");
        let env = Env::empty();
        let sheet = DerivedSheet::compute(&creature, &env);
        let config = EditorConfig::default();

        let first = format_sheet(&creature, &sheet, &config);
        let second = format_sheet(&creature, &sheet, &config);
        assert_eq!(first, second);
        assert!(first.contains("HP 1/1"));
        assert!(first.contains("AC 10"));
    }
}
