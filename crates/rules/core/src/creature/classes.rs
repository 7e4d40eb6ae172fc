//! Class levels taken by a creature.

use arrayvec::ArrayVec;

use crate::config::EditorConfig;
use crate::error::{ErrorSeverity, RulesError};
use crate::ids::ClassId;

/// One class a creature has taken levels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassLevelEntry {
    pub class: ClassId,
    pub level: u8,
}

impl ClassLevelEntry {
    pub fn new(class: ClassId, level: u8) -> Self {
        Self { class, level }
    }
}

/// Raised when a creature already holds levels in the maximum number of
/// distinct classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("creature already has {} class slots in use", EditorConfig::MAX_CLASS_SLOTS)]
pub struct ClassSlotsFull;

impl RulesError for ClassSlotsFull {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CLASS_SLOTS_FULL"
    }
}

/// The creature's class levels, at most one entry per class.
///
/// Capacity is fixed at [`EditorConfig::MAX_CLASS_SLOTS`]; the enhanced
/// data model stores class levels inline rather than behind an
/// allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClassList {
    entries: ArrayVec<ClassLevelEntry, { EditorConfig::MAX_CLASS_SLOTS }>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ClassLevelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of levels across all classes. 0 for an unleveled template.
    pub fn total_level(&self) -> i32 {
        self.entries
            .iter()
            .map(|entry| i32::from(entry.level))
            .sum()
    }

    /// Current level in a class, if the creature has any.
    pub fn level_of(&self, class: ClassId) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.class == class)
            .map(|entry| entry.level)
    }

    /// Sets the creature's level in a class, adding a slot when the class
    /// is new.
    ///
    /// # Errors
    ///
    /// Returns [`ClassSlotsFull`] when the class is new and every slot is
    /// already taken.
    pub fn set_level(&mut self, class: ClassId, level: u8) -> Result<(), ClassSlotsFull> {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.class == class) {
            entry.level = level;
            return Ok(());
        }
        self.entries
            .try_push(ClassLevelEntry::new(class, level))
            .map_err(|_| ClassSlotsFull)
    }

    /// Removes the creature's levels in a class, returning the removed
    /// entry if it existed.
    pub fn remove(&mut self, class: ClassId) -> Option<ClassLevelEntry> {
        let index = self.entries.iter().position(|entry| entry.class == class)?;
        Some(self.entries.remove(index))
    }
}
