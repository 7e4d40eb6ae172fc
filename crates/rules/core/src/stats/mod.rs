//! Derived-stat computations.
//!
//! Every function here is pure, synchronous, and idempotent: the owning
//! panel mutates one field on the creature model, then calls the relevant
//! computation(s) and writes the results to the display (and, for hit
//! points, back into the model). There is no caching, no invalidation,
//! and no observer graph; ordering is whatever the caller spells out.
//!
//! ## Layers
//!
//! ```text
//! [ Ability scores + racial adjustments ]
//!      |
//! [ Ability modifiers ]
//!      |
//! [ Armor class | Hit points | Saving throws ]   (independent)
//!
//! [ Class levels + equipment ] -> [ Attack bonus ]
//! ```

pub mod ability;
pub mod armor_class;
pub mod combat;
pub mod hit_points;
pub mod saves;
pub mod sheet;

// Re-export primary types
pub use ability::{Ability, AbilityModifiers, AbilityScores, RacialModifiers, ability_modifier};
pub use armor_class::{ARMOR_CLASS_BASE, ArmorClass, total_armor_class};
pub use combat::CombatStats;
pub use hit_points::HitPoints;
pub use saves::{BaseSaves, SavingThrows};
pub use sheet::DerivedSheet;
