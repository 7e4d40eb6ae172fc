//! Synchronous creature-edit orchestration.
//!
//! This crate sits between the UI and `rules-core`: it owns the creature
//! being edited, applies field edits, and runs the derived-stat
//! recomputations in the fixed per-field order. Widget population goes
//! through [`EditSession::bulk_update`] so a screenful of writes costs
//! one recomputation pass instead of one per field.

pub mod dirty;
pub mod display;
mod session;

pub use dirty::DirtyFields;
pub use session::{BulkUpdate, EditSession};
