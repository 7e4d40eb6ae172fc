use crate::ids::AppearanceId;

/// Size category of a creature, determined by its appearance row.
///
/// Smaller creatures are harder to hit; the category contributes a flat
/// armor-class offset.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SizeCategory {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl SizeCategory {
    /// Armor-class offset for this size category.
    pub const fn ac_modifier(self) -> i32 {
        match self {
            Self::Tiny => 2,
            Self::Small => 1,
            Self::Medium => 0,
            Self::Large => -1,
            Self::Huge => -2,
        }
    }
}

/// Oracle mapping appearance rows to size categories.
pub trait AppearanceOracle: Send + Sync {
    /// Returns the size category for an appearance, or `None` for an
    /// unknown id.
    fn size(&self, appearance: AppearanceId) -> Option<SizeCategory>;
}
