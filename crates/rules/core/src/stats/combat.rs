//! Base attack bonus aggregation.
//!
//! The per-class progression values come from game data through the class
//! oracle; multiclass totals are plain sums. Equipment contributes the
//! attack-affecting bonuses on every equipped item. Computed fresh on
//! each request, never cached across model mutations.

use crate::creature::{ClassList, Equipment};
use crate::env::Env;

/// Attack-bonus breakdown exposed to the combat panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Progression-derived bonus summed across class levels.
    pub base_attack: i32,
    /// Sum of attack-affecting bonuses on equipped items.
    pub equipment_bonus: i32,
    /// `base_attack + equipment_bonus`.
    pub total_attack: i32,
}

impl CombatStats {
    pub fn new(base_attack: i32, equipment_bonus: i32) -> Self {
        Self {
            base_attack,
            equipment_bonus,
            total_attack: base_attack + equipment_bonus,
        }
    }
}

/// Compute the attack-bonus breakdown for a creature.
///
/// An empty class list yields a base of 0; an absent class or item oracle
/// degrades its term to 0. The computation itself never fails.
pub fn compute(classes: &ClassList, equipment: &Equipment, env: &Env<'_>) -> CombatStats {
    let base_attack = classes
        .entries()
        .iter()
        .map(|entry| env.base_attack_bonus(entry.class, entry.level))
        .sum();

    let equipment_bonus = equipment
        .equipped()
        .map(|handle| env.item_attack_bonus(handle))
        .sum();

    CombatStats::new(base_attack, equipment_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::EquipSlot;
    use crate::env::{ItemDefinition, ItemKind, ItemOracle, ItemProperty};
    use crate::ids::{ClassId, ItemHandle};
    use crate::stats::BaseSaves;

    /// Full-progression stand-in: 1 attack point per level for any class.
    struct FlatProgression;

    impl crate::env::ClassOracle for FlatProgression {
        fn base_attack_bonus(&self, _class: ClassId, level: u8) -> Option<i32> {
            Some(i32::from(level))
        }

        fn base_saves(&self, _class: ClassId, _level: u8) -> Option<BaseSaves> {
            Some(BaseSaves::ZERO)
        }
    }

    #[derive(Debug)]
    struct SingleItem(ItemDefinition);

    impl ItemOracle for SingleItem {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            (self.0.handle == handle).then(|| self.0.clone())
        }
    }

    #[test]
    fn empty_creature_has_all_zero_stats() {
        let stats = compute(&ClassList::new(), &Equipment::empty(), &Env::empty());

        assert_eq!(stats.base_attack, 0);
        assert_eq!(stats.equipment_bonus, 0);
        assert_eq!(stats.total_attack, 0);
    }

    #[test]
    fn base_attack_sums_across_classes() {
        let mut classes = ClassList::new();
        classes.set_level(ClassId(4), 5).unwrap();
        classes.set_level(ClassId(9), 3).unwrap();

        let progression = FlatProgression;
        let env = Env::new(None, None, Some(&progression), None);

        let stats = compute(&classes, &Equipment::empty(), &env);
        assert_eq!(stats.base_attack, 8);
        assert_eq!(stats.total_attack, 8);
    }

    #[test]
    fn equipment_bonus_reads_equipped_item_properties() {
        let sword = ItemDefinition::new(ItemHandle(1), "Longsword +2", ItemKind::Weapon)
            .with_properties(vec![ItemProperty::EnhancementBonus(2)]);
        let items = SingleItem(sword);
        let env = Env::new(None, None, None, Some(&items));

        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::RightHand, ItemHandle(1));

        let stats = compute(&ClassList::new(), &equipment, &env);
        assert_eq!(stats.base_attack, 0);
        assert_eq!(stats.equipment_bonus, 2);
        assert_eq!(stats.total_attack, 2);
    }

    #[test]
    fn missing_item_oracle_degrades_equipment_term_to_zero() {
        let mut classes = ClassList::new();
        classes.set_level(ClassId(4), 2).unwrap();

        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::RightHand, ItemHandle(1));

        let progression = FlatProgression;
        let env = Env::new(None, None, Some(&progression), None);

        let stats = compute(&classes, &equipment, &env);
        assert_eq!(stats.base_attack, 2);
        assert_eq!(stats.equipment_bonus, 0);
    }

    #[test]
    fn unresolvable_handles_contribute_nothing() {
        let sword = ItemDefinition::new(ItemHandle(1), "Longsword", ItemKind::Weapon);
        let items = SingleItem(sword);
        let env = Env::new(None, None, None, Some(&items));

        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::LeftHand, ItemHandle(999));

        let stats = compute(&ClassList::new(), &equipment, &env);
        assert_eq!(stats.equipment_bonus, 0);
    }

    #[test]
    fn compute_is_idempotent() {
        let mut classes = ClassList::new();
        classes.set_level(ClassId(4), 6).unwrap();
        let progression = FlatProgression;
        let env = Env::new(None, None, Some(&progression), None);

        let first = compute(&classes, &Equipment::empty(), &env);
        let second = compute(&classes, &Equipment::empty(), &env);
        assert_eq!(first, second);
    }
}
