//! One-pass aggregation of every derived value for a creature.
//!
//! Panels that only care about one field call the individual computations;
//! the sheet exists for whole-creature refreshes (file load, class table
//! rebuild) and for display surfaces that render everything at once.

use crate::creature::CreatureState;
use crate::env::Env;
use crate::stats::{
    AbilityModifiers, ArmorClass, CombatStats, HitPoints, SavingThrows, combat, hit_points, saves,
};

/// Every derived statistic, computed from the model in a single
/// deterministic pass. NOT stored - the hit-point pair is the only part
/// the caller writes back into the model.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedSheet {
    pub modifiers: AbilityModifiers,
    pub armor_class: ArmorClass,
    pub hit_points: HitPoints,
    pub combat: CombatStats,
    pub saves: SavingThrows,
    /// Effective challenge rating (stored rating + adjustment, floored at 0).
    pub challenge_rating: f32,
}

impl DerivedSheet {
    /// Compute the full sheet.
    ///
    /// Order is fixed: ability modifiers feed armor class, hit points,
    /// and saves, so they are computed first; the remaining computations
    /// are independent of each other.
    pub fn compute(creature: &CreatureState, env: &Env<'_>) -> Self {
        let racial = env.racial_modifiers(creature.race);
        let modifiers = AbilityModifiers::compute(&creature.abilities, &racial);

        let armor_class = ArmorClass::new(
            creature.natural_ac,
            modifiers.dexterity,
            env.size_modifier(creature.appearance),
        );

        let hit_points = hit_points::recompute(
            creature.base_hit_points,
            modifiers.constitution,
            creature.classes.total_level(),
        );

        let combat = combat::compute(&creature.classes, &creature.equipment, env);
        let saves = saves::compute(&creature.classes, &modifiers, env);

        Self {
            modifiers,
            armor_class,
            hit_points,
            combat,
            saves,
            challenge_rating: creature.challenge.effective(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{ChallengeRating, EquipSlot};
    use crate::env::{
        AppearanceOracle, ClassOracle, ItemDefinition, ItemKind, ItemOracle, ItemProperty,
        RaceOracle, SizeCategory,
    };
    use crate::ids::{AppearanceId, ClassId, ItemHandle, RaceId};
    use crate::stats::{AbilityScores, BaseSaves, RacialModifiers};

    #[derive(Debug)]
    struct TestTables;

    impl RaceOracle for TestTables {
        fn racial_modifiers(&self, race: RaceId) -> Option<RacialModifiers> {
            (race == RaceId(1)).then_some(RacialModifiers {
                dexterity: 2,
                constitution: -2,
                ..RacialModifiers::ZERO
            })
        }
    }

    impl AppearanceOracle for TestTables {
        fn size(&self, appearance: AppearanceId) -> Option<SizeCategory> {
            (appearance == AppearanceId(3)).then_some(SizeCategory::Large)
        }
    }

    impl ClassOracle for TestTables {
        fn base_attack_bonus(&self, _class: ClassId, level: u8) -> Option<i32> {
            Some(i32::from(level))
        }

        fn base_saves(&self, _class: ClassId, level: u8) -> Option<BaseSaves> {
            let level = i32::from(level);
            Some(BaseSaves {
                fortitude: 2 + level / 2,
                reflex: level / 3,
                will: level / 3,
            })
        }
    }

    impl ItemOracle for TestTables {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            (handle == ItemHandle(100)).then(|| {
                ItemDefinition::new(handle, "Battleaxe +1", ItemKind::Weapon)
                    .with_properties(vec![ItemProperty::EnhancementBonus(1)])
            })
        }
    }

    fn elf_warrior() -> CreatureState {
        let mut creature = CreatureState::new("elf_warrior");
        creature.race = RaceId(1);
        creature.appearance = AppearanceId(3);
        creature.abilities = AbilityScores::new(16, 14, 14, 10, 12, 8);
        creature.natural_ac = 2;
        creature.base_hit_points = 40;
        creature.classes.set_level(ClassId(4), 5).unwrap();
        creature.equipment.equip(EquipSlot::RightHand, ItemHandle(100));
        creature.challenge = ChallengeRating::new(4.0, 1);
        creature
    }

    #[test]
    fn integrated_elf_warrior_sheet() {
        let tables = TestTables;
        let env = Env::with_all(&tables, &tables, &tables, &tables);

        let sheet = DerivedSheet::compute(&elf_warrior(), &env);

        // DEX 14 + 2 racial = 16 -> +3; CON 14 - 2 racial = 12 -> +1
        assert_eq!(sheet.modifiers.dexterity, 3);
        assert_eq!(sheet.modifiers.constitution, 1);
        // AC: 10 + 2 natural + 3 dex - 1 large = 14
        assert_eq!(sheet.armor_class.total(), 14);
        // HP: 40 + 1 x 5 = 45, current at max
        assert_eq!(sheet.hit_points.maximum, 45);
        assert_eq!(sheet.hit_points.current, 45);
        // Attack: 5 base + 1 enhancement = 6
        assert_eq!(sheet.combat.total_attack, 6);
        // Fortitude: (2 + 2) + 1 = 5
        assert_eq!(sheet.saves.fortitude, 5);
        // CR: 4.0 + 1
        assert_eq!(sheet.challenge_rating, 5.0);
    }

    #[test]
    fn sheet_with_empty_env_uses_neutral_lookups() {
        let sheet = DerivedSheet::compute(&elf_warrior(), &Env::empty());

        // no racial adjustments: DEX 14 -> +2, CON 14 -> +2
        assert_eq!(sheet.modifiers.dexterity, 2);
        // AC: 10 + 2 + 2 + 0
        assert_eq!(sheet.armor_class.total(), 14);
        // HP: 40 + 2 x 5
        assert_eq!(sheet.hit_points.maximum, 50);
        // no progression data, no item data
        assert_eq!(sheet.combat.total_attack, 0);
    }

    #[test]
    fn compute_twice_yields_identical_sheets() {
        let tables = TestTables;
        let env = Env::with_all(&tables, &tables, &tables, &tables);
        let creature = elf_warrior();

        assert_eq!(
            DerivedSheet::compute(&creature, &env),
            DerivedSheet::compute(&creature, &env)
        );
    }
}
