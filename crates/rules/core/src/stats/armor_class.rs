//! Armor class - derived defensive rating.
//!
//! AC is display-only state: it is recomputed whenever natural armor,
//! dexterity, or the creature's size category changes, and never persisted.
//!
//! total = 10 + natural + dex modifier + size modifier

/// Every creature starts from this before any bonuses apply.
pub const ARMOR_CLASS_BASE: i32 = 10;

/// Itemized armor-class terms plus their total.
///
/// The total is intentionally unclamped; heavy penalties can push it
/// below zero and the editor displays the negative value as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorClass {
    /// Stored natural-armor value from the creature model.
    pub natural: i32,
    /// Dexterity modifier (base + racial) at computation time.
    pub dex_bonus: i32,
    /// AC offset for the creature's size category.
    pub size_modifier: i32,
}

impl ArmorClass {
    pub fn new(natural_ac: u8, dex_modifier: i32, size_modifier: i32) -> Self {
        Self {
            natural: i32::from(natural_ac),
            dex_bonus: dex_modifier,
            size_modifier,
        }
    }

    /// Total armor class: `10 + natural + dex + size`, unclamped.
    pub fn total(&self) -> i32 {
        ARMOR_CLASS_BASE + self.natural + self.dex_bonus + self.size_modifier
    }
}

/// Convenience form when the caller has no use for the breakdown.
pub fn total_armor_class(natural_ac: u8, dex_modifier: i32, size_modifier: i32) -> i32 {
    ArmorClass::new(natural_ac, dex_modifier, size_modifier).total()
}
