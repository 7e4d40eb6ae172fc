use crate::ids::RaceId;
use crate::stats::RacialModifiers;

/// Oracle providing per-race ability adjustments.
///
/// Backed by the race table in game data; the core only consumes the six
/// signed offsets for a given race id.
pub trait RaceOracle: Send + Sync + std::fmt::Debug {
    /// Returns the ability adjustments for a race, or `None` for an
    /// unknown id.
    fn racial_modifiers(&self, race: RaceId) -> Option<RacialModifiers>;
}
