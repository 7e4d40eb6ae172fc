use crate::ids::ItemHandle;

/// Oracle resolving item handles to their definitions.
pub trait ItemOracle: Send + Sync + std::fmt::Debug {
    /// Returns the definition for an item, or `None` for an unknown handle.
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;
}

/// Item definition with common fields and a property list.
///
/// # Design: Base + Kind Pattern
///
/// - The base struct holds the fields every item has (handle, name, kind)
/// - `properties` holds the magical bonuses the stat computations scan
///
/// Only attack-affecting properties matter to this crate; everything else
/// rides along untouched for the owning editor panels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<ItemProperty>,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: Vec<ItemProperty>) -> Self {
        self.properties = properties;
        self
    }

    /// Sum of the attack-affecting bonuses on this item.
    ///
    /// Attack-bonus and enhancement-bonus properties both raise the
    /// wielder's attack rolls, so both count toward the equipment term.
    pub fn attack_bonus(&self) -> i32 {
        self.properties
            .iter()
            .map(|property| match property {
                ItemProperty::AttackBonus(value) => *value,
                ItemProperty::EnhancementBonus(value) => *value,
                ItemProperty::Custom(_) => 0,
            })
            .sum()
    }
}

/// Item type. The stat computations treat all kinds alike; the kind
/// exists so equip panels can filter catalogs per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Accessory,
    Custom(u16),
}

/// Magical property on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemProperty {
    /// Flat bonus to attack rolls.
    AttackBonus(i32),
    /// Enhancement bonus; counts toward attack rolls as well.
    EnhancementBonus(i32),
    /// Property kind this crate does not interpret.
    Custom(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_bonus_sums_attack_affecting_properties() {
        let item = ItemDefinition::new(ItemHandle(7), "Longsword +1", ItemKind::Weapon)
            .with_properties(vec![
                ItemProperty::EnhancementBonus(1),
                ItemProperty::AttackBonus(2),
                ItemProperty::Custom(42),
            ]);

        assert_eq!(item.attack_bonus(), 3);
    }

    #[test]
    fn plain_items_grant_nothing() {
        let item = ItemDefinition::new(ItemHandle(1), "Club", ItemKind::Weapon);
        assert_eq!(item.attack_bonus(), 0);
    }
}
