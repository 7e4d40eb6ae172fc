/// Editor configuration constants and tunable parameters.
///
/// The configuration is an explicit value passed to the crates that need
/// it; there is no process-wide settings singleton. Anything that varies
/// per install (display preferences, input caps) lives here, while hard
/// data-model limits are compile-time constants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Upper bound the edit session applies to ability-score input.
    /// Scores above the cap are clamped; there is no lower bound.
    pub ability_score_cap: u8,

    /// Emit per-term breakdowns (AC terms, attack terms) when formatting
    /// a stat sheet, instead of totals only.
    pub verbose_breakdown: bool,
}

impl EditorConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of class slots a creature can hold levels in.
    pub const MAX_CLASS_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    /// Unmodified ability score (modifier 0).
    pub const DEFAULT_ABILITY_SCORE: u8 = 10;
    /// Conventional editing cap; the data model itself accepts the full u8 range.
    pub const DEFAULT_ABILITY_SCORE_CAP: u8 = 50;

    pub fn new() -> Self {
        Self {
            ability_score_cap: Self::DEFAULT_ABILITY_SCORE_CAP,
            verbose_breakdown: false,
        }
    }

    pub fn with_ability_score_cap(ability_score_cap: u8) -> Self {
        Self {
            ability_score_cap,
            ..Self::new()
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
