//! The creature data model owned by an edit session.
//!
//! `CreatureState` is the authoritative model: widget edits mutate one
//! field here, then the owning panel recomputes the derived values. Only
//! maximum/current hit points are derived AND persisted; everything else
//! derived is display-only.

mod classes;
mod equipment;

pub use classes::{ClassLevelEntry, ClassList, ClassSlotsFull};
pub use equipment::{EquipSlot, Equipment};

use crate::ids::{AppearanceId, RaceId};
use crate::stats::{AbilityScores, HitPoints};

/// Challenge rating stored on the model plus a designer adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChallengeRating {
    pub rating: f32,
    pub adjustment: i32,
}

impl ChallengeRating {
    pub fn new(rating: f32, adjustment: i32) -> Self {
        Self { rating, adjustment }
    }

    /// Effective rating shown on the sheet; floored at 0 so a large
    /// negative adjustment cannot display a negative difficulty.
    pub fn effective(&self) -> f32 {
        (self.rating + self.adjustment as f32).max(0.0)
    }
}

/// The creature being edited.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureState {
    /// Script-facing identifier.
    pub tag: String,
    pub first_name: String,
    pub last_name: String,

    pub race: RaceId,
    pub appearance: AppearanceId,

    pub abilities: AbilityScores,
    /// Stored natural-armor value.
    pub natural_ac: u8,

    /// The "rolled" hit-point value the designer edits directly.
    pub base_hit_points: i16,
    /// Derived; kept in the model because the file format persists it.
    pub max_hit_points: i16,
    /// Derived; reset to the maximum on every recompute.
    pub current_hit_points: i16,

    pub classes: ClassList,
    pub equipment: Equipment,
    pub challenge: ChallengeRating,
}

impl CreatureState {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Full display name, skipping empty parts.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, true) => self.tag.clone(),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Sum of levels across all class slots.
    pub fn total_level(&self) -> i32 {
        self.classes.total_level()
    }

    /// Writes recomputed hit points back into the persisted fields.
    pub fn apply_hit_points(&mut self, hit_points: HitPoints) {
        self.max_hit_points = hit_points.maximum;
        self.current_hit_points = hit_points.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_challenge_rating_floors_at_zero() {
        assert_eq!(ChallengeRating::new(5.0, 2).effective(), 7.0);
        assert_eq!(ChallengeRating::new(1.0, -4).effective(), 0.0);
        assert_eq!(ChallengeRating::new(0.5, 0).effective(), 0.5);
    }

    #[test]
    fn display_name_prefers_name_parts_over_tag() {
        let mut creature = CreatureState::new("nw_goblin001");
        assert_eq!(creature.display_name(), "nw_goblin001");

        creature.first_name = "Grim".to_string();
        assert_eq!(creature.display_name(), "Grim");

        creature.last_name = "Nailbiter".to_string();
        assert_eq!(creature.display_name(), "Grim Nailbiter");
    }

    #[test]
    fn apply_hit_points_writes_both_fields() {
        let mut creature = CreatureState::new("c");
        creature.apply_hit_points(crate::stats::HitPoints {
            maximum: 20,
            current: 20,
        });

        assert_eq!(creature.max_hit_points, 20);
        assert_eq!(creature.current_hit_points, 20);
    }
}
