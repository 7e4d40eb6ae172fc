use crate::ids::ClassId;
use crate::stats::BaseSaves;

/// Oracle providing per-class progression lookups.
///
/// The progression tables live in game data; the core never computes
/// them. Both lookups answer "what is the cumulative value at this class
/// level", and multiclass totals are plain sums of the per-class answers.
pub trait ClassOracle: Send + Sync {
    /// Cumulative base attack bonus granted by `level` levels of `class`,
    /// or `None` for an unknown class id.
    fn base_attack_bonus(&self, class: ClassId, level: u8) -> Option<i32>;

    /// Cumulative base saving throws granted by `level` levels of `class`,
    /// or `None` for an unknown class id.
    fn base_saves(&self, class: ClassId, level: u8) -> Option<BaseSaves>;
}
