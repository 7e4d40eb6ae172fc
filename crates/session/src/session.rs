//! The creature-edit session.
//!
//! `EditSession` owns the creature model and a borrowed environment of
//! lookup tables. Every mutation entry point runs synchronously on the
//! caller's thread: the field is written, then the affected derived
//! groups are recomputed in one pass. There is no event queue and no
//! observer graph; the call sites below spell out exactly what each edit
//! invalidates.

use rules_core::stats::{combat, hit_points, saves};
use rules_core::{
    Ability, AbilityModifiers, AppearanceId, ArmorClass, ClassId, ClassLevelEntry, ClassSlotsFull,
    CreatureState, DerivedSheet, EditorConfig, Env, EquipSlot, ItemHandle, RaceId,
};

use crate::dirty::{DirtyFields, ability_edit, class_edit, race_edit};

/// An in-progress edit of one creature.
///
/// Exclusively owns the model for its lifetime; there are no concurrent
/// editors and no locking discipline.
pub struct EditSession<'a> {
    creature: CreatureState,
    env: Env<'a>,
    config: EditorConfig,
    sheet: DerivedSheet,
    recompute_passes: u64,
}

impl<'a> EditSession<'a> {
    /// Loads a creature into a fresh session.
    ///
    /// Loading is the bulk-population path: every derived group is
    /// computed once, and the derived hit points are written back into
    /// the model.
    pub fn load(creature: CreatureState, env: Env<'a>, config: EditorConfig) -> Self {
        let sheet = DerivedSheet::compute(&creature, &env);
        let mut session = Self {
            creature,
            env,
            config,
            sheet,
            recompute_passes: 1,
        };
        let hit_points = session.sheet.hit_points;
        session.creature.apply_hit_points(hit_points);
        tracing::debug!(tag = %session.creature.tag, "creature loaded");
        session
    }

    pub fn creature(&self) -> &CreatureState {
        &self.creature
    }

    pub fn sheet(&self) -> &DerivedSheet {
        &self.sheet
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Number of recomputation passes run so far (including the load).
    pub fn recompute_passes(&self) -> u64 {
        self.recompute_passes
    }

    /// Runs several field edits as one batch.
    ///
    /// Writes inside the closure only mark derived groups dirty; a single
    /// recomputation pass runs when the closure returns. This is the
    /// population path widget code uses to avoid a recompute per field.
    pub fn bulk_update<R>(&mut self, f: impl FnOnce(&mut BulkUpdate<'_>) -> R) -> R {
        let mut tx = BulkUpdate {
            creature: &mut self.creature,
            config: &self.config,
            dirty: DirtyFields::empty(),
        };
        let result = f(&mut tx);
        let dirty = tx.dirty;
        if !dirty.is_empty() {
            self.apply(dirty);
        }
        result
    }

    // ===== single-field entry points (one recompute pass each) =====

    /// Sets a base ability score, clamped to the configured cap.
    pub fn set_ability_score(&mut self, ability: Ability, score: u8) {
        self.bulk_update(|tx| tx.set_ability_score(ability, score))
    }

    pub fn set_race(&mut self, race: RaceId) {
        self.bulk_update(|tx| tx.set_race(race))
    }

    pub fn set_appearance(&mut self, appearance: AppearanceId) {
        self.bulk_update(|tx| tx.set_appearance(appearance))
    }

    pub fn set_natural_ac(&mut self, natural_ac: u8) {
        self.bulk_update(|tx| tx.set_natural_ac(natural_ac))
    }

    pub fn set_base_hit_points(&mut self, base_hit_points: i16) {
        self.bulk_update(|tx| tx.set_base_hit_points(base_hit_points))
    }

    /// Sets the creature's level in a class.
    ///
    /// # Errors
    ///
    /// Returns [`ClassSlotsFull`] when the class is new and every slot is
    /// taken; nothing is recomputed in that case.
    pub fn set_class_level(&mut self, class: ClassId, level: u8) -> Result<(), ClassSlotsFull> {
        self.bulk_update(|tx| tx.set_class_level(class, level))
    }

    pub fn remove_class(&mut self, class: ClassId) -> Option<ClassLevelEntry> {
        self.bulk_update(|tx| tx.remove_class(class))
    }

    /// Equips an item, returning the displaced handle if any.
    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        self.bulk_update(|tx| tx.equip(slot, handle))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemHandle> {
        self.bulk_update(|tx| tx.unequip(slot))
    }

    pub fn set_challenge_rating(&mut self, rating: f32) {
        self.bulk_update(|tx| tx.set_challenge_rating(rating))
    }

    pub fn set_challenge_adjustment(&mut self, adjustment: i32) {
        self.bulk_update(|tx| tx.set_challenge_adjustment(adjustment))
    }

    /// Recomputes the dirty derived groups in the fixed order.
    ///
    /// Modifiers run first because armor class, hit points, and saves
    /// read them; hit points are the only derived values written back
    /// into the model.
    fn apply(&mut self, dirty: DirtyFields) {
        self.recompute_passes += 1;
        tracing::debug!(?dirty, pass = self.recompute_passes, "recomputing derived stats");

        if dirty.contains(DirtyFields::MODIFIERS) {
            let racial = self.env.racial_modifiers(self.creature.race);
            self.sheet.modifiers = AbilityModifiers::compute(&self.creature.abilities, &racial);
        }
        if dirty.contains(DirtyFields::ARMOR_CLASS) {
            self.sheet.armor_class = ArmorClass::new(
                self.creature.natural_ac,
                self.sheet.modifiers.dexterity,
                self.env.size_modifier(self.creature.appearance),
            );
        }
        if dirty.contains(DirtyFields::HIT_POINTS) {
            let hit_points = hit_points::recompute(
                self.creature.base_hit_points,
                self.sheet.modifiers.constitution,
                self.creature.classes.total_level(),
            );
            self.sheet.hit_points = hit_points;
            self.creature.apply_hit_points(hit_points);
        }
        if dirty.contains(DirtyFields::COMBAT) {
            self.sheet.combat =
                combat::compute(&self.creature.classes, &self.creature.equipment, &self.env);
        }
        if dirty.contains(DirtyFields::SAVES) {
            self.sheet.saves =
                saves::compute(&self.creature.classes, &self.sheet.modifiers, &self.env);
        }
        if dirty.contains(DirtyFields::CHALLENGE) {
            self.sheet.challenge_rating = self.creature.challenge.effective();
        }
    }
}

/// Write handle used inside [`EditSession::bulk_update`].
///
/// Setters mutate the model and accumulate dirty bits; nothing is
/// recomputed until the enclosing scope closes.
pub struct BulkUpdate<'g> {
    creature: &'g mut CreatureState,
    config: &'g EditorConfig,
    dirty: DirtyFields,
}

impl BulkUpdate<'_> {
    pub fn set_ability_score(&mut self, ability: Ability, score: u8) {
        let score = score.min(self.config.ability_score_cap);
        let old = self.creature.abilities.get(ability);
        self.creature.abilities.set(ability, score);
        self.dirty |= ability_edit(ability);
        tracing::debug!(%ability, old, new = score, "ability score changed");
    }

    pub fn set_race(&mut self, race: RaceId) {
        self.creature.race = race;
        self.dirty |= race_edit();
        tracing::debug!(%race, "race changed");
    }

    pub fn set_appearance(&mut self, appearance: AppearanceId) {
        self.creature.appearance = appearance;
        self.dirty |= DirtyFields::ARMOR_CLASS;
        tracing::debug!(%appearance, "appearance changed");
    }

    pub fn set_natural_ac(&mut self, natural_ac: u8) {
        self.creature.natural_ac = natural_ac;
        self.dirty |= DirtyFields::ARMOR_CLASS;
        tracing::debug!(natural_ac, "natural armor changed");
    }

    pub fn set_base_hit_points(&mut self, base_hit_points: i16) {
        self.creature.base_hit_points = base_hit_points;
        self.dirty |= DirtyFields::HIT_POINTS;
        tracing::debug!(base_hit_points, "base hit points changed");
    }

    pub fn set_class_level(&mut self, class: ClassId, level: u8) -> Result<(), ClassSlotsFull> {
        self.creature.classes.set_level(class, level)?;
        self.dirty |= class_edit();
        tracing::debug!(%class, level, "class level changed");
        Ok(())
    }

    pub fn remove_class(&mut self, class: ClassId) -> Option<ClassLevelEntry> {
        let removed = self.creature.classes.remove(class)?;
        self.dirty |= class_edit();
        tracing::debug!(%class, "class removed");
        Some(removed)
    }

    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        let previous = self.creature.equipment.equip(slot, handle);
        self.dirty |= DirtyFields::COMBAT;
        tracing::debug!(%slot, %handle, "item equipped");
        previous
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemHandle> {
        let previous = self.creature.equipment.unequip(slot);
        if previous.is_some() {
            self.dirty |= DirtyFields::COMBAT;
            tracing::debug!(%slot, "item unequipped");
        }
        previous
    }

    pub fn set_challenge_rating(&mut self, rating: f32) {
        self.creature.challenge.rating = rating;
        self.dirty |= DirtyFields::CHALLENGE;
    }

    pub fn set_challenge_adjustment(&mut self, adjustment: i32) {
        self.creature.challenge.adjustment = adjustment;
        self.dirty |= DirtyFields::CHALLENGE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> EditSession<'static> {
        EditSession::load(
            CreatureState::new("test"),
            Env::empty(),
            EditorConfig::default(),
        )
    }

    #[test]
    fn load_counts_as_the_first_pass() {
        let session = empty_session();
        assert_eq!(session.recompute_passes(), 1);
        // base 0 HP clamps to the minimum of 1 and is written back
        assert_eq!(session.creature().max_hit_points, 1);
        assert_eq!(session.creature().current_hit_points, 1);
    }

    #[test]
    fn single_edit_runs_a_single_pass() {
        let mut session = empty_session();
        session.set_natural_ac(3);

        assert_eq!(session.recompute_passes(), 2);
        assert_eq!(session.sheet().armor_class.total(), 13);
    }

    #[test]
    fn ability_score_input_is_clamped_to_the_configured_cap() {
        let mut session = empty_session();
        session.set_ability_score(Ability::Strength, 200);

        assert_eq!(
            session.creature().abilities.strength,
            EditorConfig::DEFAULT_ABILITY_SCORE_CAP
        );
    }

    #[test]
    fn failed_class_edit_does_not_recompute() {
        let mut session = empty_session();
        for id in 0..EditorConfig::MAX_CLASS_SLOTS {
            session.set_class_level(ClassId(id as i32), 1).unwrap();
        }
        let passes = session.recompute_passes();

        assert!(session.set_class_level(ClassId(99), 1).is_err());
        assert_eq!(session.recompute_passes(), passes);
    }

    #[test]
    fn unequip_of_empty_slot_is_a_no_op() {
        let mut session = empty_session();
        let passes = session.recompute_passes();

        assert_eq!(session.unequip(EquipSlot::Head), None);
        assert_eq!(session.recompute_passes(), passes);
    }
}
