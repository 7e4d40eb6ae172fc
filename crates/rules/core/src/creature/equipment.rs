//! Equipment slots for a creature.
//!
//! Slots hold handles into the item catalog; the item data itself
//! (properties, kind) is resolved through the item oracle at
//! recomputation time, so equipment state stays a plain value.

use strum::EnumCount as _;

use crate::ids::ItemHandle;

/// Body slots a creature can equip items into.
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
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EquipSlot {
    Head,
    Neck,
    Chest,
    Arms,
    RightHand,
    LeftHand,
    Cloak,
    Belt,
    Boots,
    RightRing,
    LeftRing,
}

/// Equipment state for a creature: one optional item handle per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [Option<ItemHandle>; EquipSlot::COUNT],
}

impl Equipment {
    /// Creates empty equipment (nothing in any slot).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item into a slot, returning the previously equipped
    /// handle if any.
    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        self.slots[slot as usize].replace(handle)
    }

    /// Unequips a slot, returning its handle if anything was equipped.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemHandle> {
        self.slots[slot as usize].take()
    }

    /// Handle currently equipped in a slot.
    pub fn get(&self, slot: EquipSlot) -> Option<ItemHandle> {
        self.slots[slot as usize]
    }

    /// Iterates the handles of every occupied slot.
    pub fn equipped(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_returns_the_displaced_handle() {
        let mut equipment = Equipment::empty();

        assert_eq!(equipment.equip(EquipSlot::RightHand, ItemHandle(1)), None);
        assert_eq!(
            equipment.equip(EquipSlot::RightHand, ItemHandle(2)),
            Some(ItemHandle(1))
        );
        assert_eq!(equipment.get(EquipSlot::RightHand), Some(ItemHandle(2)));
    }

    #[test]
    fn unequip_empties_the_slot() {
        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::Head, ItemHandle(5));

        assert_eq!(equipment.unequip(EquipSlot::Head), Some(ItemHandle(5)));
        assert_eq!(equipment.unequip(EquipSlot::Head), None);
        assert!(equipment.is_empty());
    }

    #[test]
    fn equipped_yields_occupied_slots_only() {
        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::RightHand, ItemHandle(1));
        equipment.equip(EquipSlot::Chest, ItemHandle(2));

        let mut handles: Vec<_> = equipment.equipped().collect();
        handles.sort();
        assert_eq!(handles, vec![ItemHandle(1), ItemHandle(2)]);
    }
}
