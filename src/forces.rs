//! Per-point force terms.
//!
//! Each term is a pure function of a point, the current input and the
//! config, so the field can sum them and tests can probe them directly.
//!
//! - **Spring**: pulls a point back toward its rest position.
//! - **Pointer**: pushes (or pulls) points inside `influence_radius`; exactly
//!   zero outside, with no smooth tail.
//! - **Impulse**: a ring expanding at `ripple_speed` from the impulse origin,
//!   measured against rest positions so rings stay round while points move.

use crate::config::{FieldConfig, PointerMode};
use crate::float::Float;
use crate::impulse::Impulse;
use crate::point::Point;
use crate::vec::Vec2;

/// `(rest - pos) * stiffness`.
pub fn spring_force<F: Float>(point: &Point<F>, stiffness: F) -> Vec2<F> {
    (point.rest - point.pos).scale(stiffness)
}

/// Pointer proximity force on a point currently at `pos`.
///
/// Magnitude `(1 - d / R)^2 * push_strength` for `d < R`, zero otherwise.
pub fn pointer_force<F: Float>(pos: Vec2<F>, pointer: Vec2<F>, config: &FieldConfig<F>) -> Vec2<F> {
    let offset = pos - pointer;
    let distance = offset.length();
    // NaN distance counts as out of range.
    if !(distance < config.influence_radius) {
        return Vec2::zero();
    }
    let falloff = (F::one() - distance / config.influence_radius).squared();
    let away = offset.normalize().scale(falloff * config.push_strength);
    match config.pointer_mode {
        PointerMode::Repel => away,
        PointerMode::Attract => -away,
    }
}

/// Ring weight in `[0, 1]` for a point `distance` away from the impulse origin.
///
/// Peaks when the point sits on the ring crest and falls linearly to zero at
/// `ripple_width` from it.
pub fn ring_falloff<F: Float>(distance: F, radius: F, width: F) -> F {
    let off_ring = (distance - radius).abs();
    if off_ring >= width {
        return F::zero();
    }
    F::one() - off_ring / width
}

/// Force an impulse exerts on a point whose rest position is `rest`.
pub fn impulse_force<F: Float>(
    rest: Vec2<F>,
    impulse: &Impulse<F>,
    now: F,
    config: &FieldConfig<F>,
) -> Vec2<F> {
    let decay = impulse.decay(now);
    if decay <= F::zero() {
        return Vec2::zero();
    }
    let outward = rest - impulse.origin;
    let distance = outward.length();
    let radius = impulse.radius(now, config.ripple_speed);
    let weight = ring_falloff(distance, radius, config.ripple_width);
    if weight <= F::zero() {
        return Vec2::zero();
    }
    outward.normalize().scale(config.impulse_strength * weight * decay)
}

/// Pointer plus every impulse, clamped to `max_force`.
pub fn external_force<F: Float>(
    point: &Point<F>,
    pointer: Option<Vec2<F>>,
    impulses: &[Impulse<F>],
    now: F,
    config: &FieldConfig<F>,
) -> Vec2<F> {
    let mut total = Vec2::zero();
    if let Some(pointer) = pointer {
        total += pointer_force(point.pos, pointer, config);
    }
    for impulse in impulses {
        total += impulse_force(point.rest, impulse, now, config);
    }
    total.clamp_length(config.max_force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_points_to_rest() {
        let mut p = Point::new(Vec2::new(10.0f64, 10.0));
        p.pos = Vec2::new(5.0, 5.0);
        let f = spring_force(&p, 0.1);
        assert!((f.x - 0.5).abs() < 1e-12);
        assert!((f.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_on_top_of_point_is_zero() {
        let config = FieldConfig::<f32>::new();
        let pos = Vec2::new(3.0, 3.0);
        assert_eq!(pointer_force(pos, pos, &config), Vec2::zero());
    }

    #[test]
    fn attract_mode_reverses_direction() {
        let repel = FieldConfig::<f64>::new();
        let attract = FieldConfig::<f64>::new().with_pointer_mode(PointerMode::Attract);
        let pos = Vec2::new(50.0, 0.0);
        let pointer = Vec2::zero();
        let r = pointer_force(pos, pointer, &repel);
        let a = pointer_force(pos, pointer, &attract);
        assert!(r.x > 0.0);
        assert_eq!(a, -r);
    }

    #[test]
    fn ring_falloff_band() {
        assert_eq!(ring_falloff(100.0f64, 100.0, 50.0), 1.0);
        assert_eq!(ring_falloff(125.0f64, 100.0, 50.0), 0.5);
        assert_eq!(ring_falloff(150.0f64, 100.0, 50.0), 0.0);
        assert_eq!(ring_falloff(10.0f64, 100.0, 50.0), 0.0);
    }

    #[test]
    fn impulse_at_origin_has_no_direction() {
        let config = FieldConfig::<f64>::new();
        let imp = Impulse::new(Vec2::zero(), 0.0, 2.0);
        assert_eq!(impulse_force(Vec2::zero(), &imp, 0.01, &config), Vec2::zero());
    }

    #[test]
    fn external_force_is_clamped() {
        let config = FieldConfig::<f64>::new()
            .with_push_strength(100.0)
            .with_max_force(3.0);
        let p = Point::new(Vec2::new(1.0, 0.0));
        let f = external_force(&p, Some(Vec2::zero()), &[], 0.0, &config);
        assert!((f.length() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn impulses_sum_additively() {
        let config = FieldConfig::<f64>::new().with_max_force(1e6);
        let p = Point::new(Vec2::new(175.0, 0.0));
        let imp = Impulse::new(Vec2::zero(), 0.0, 2.0);
        let once = external_force(&p, None, &[imp], 0.5, &config);
        let twice = external_force(&p, None, &[imp, imp], 0.5, &config);
        assert!((twice.x - 2.0 * once.x).abs() < 1e-9);
    }
}
