//! Hit points - the only derived values written back into the model.
//!
//! Maximum hit points are recomputed from the stored base ("rolled") value
//! plus the constitution contribution. Current hit points are reset to the
//! new maximum on every recompute: creatures are always edited at full
//! health, so any edit to base HP or Constitution is a full heal. This is
//! unconditional by design.
//!
//! max = clamp_low(base + con_modifier x total_levels, 1)

/// Derived hit-point pair, written back to the creature model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub maximum: i16,
    pub current: i16,
}

/// Recompute maximum and current hit points.
///
/// `total_class_levels` may be 0 (unleveled template), in which case the
/// constitution contribution vanishes and the maximum is the clamped base
/// value. A negative constitution modifier can drive the raw result to
/// zero or below; the result is clamped so the maximum is always at least 1.
pub fn recompute(base_hit_points: i16, con_modifier: i32, total_class_levels: i32) -> HitPoints {
    let con_contribution = con_modifier * total_class_levels;
    let raw = i32::from(base_hit_points) + con_contribution;
    let maximum = raw.clamp(1, i32::from(i16::MAX)) as i16;
    HitPoints {
        maximum,
        current: maximum,
    }
}
