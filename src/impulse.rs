//! Transient radial disturbances ("ripples").

use crate::float::Float;
use crate::vec::Vec2;

/// An expanding ring disturbance triggered at `origin` at `start_time`.
///
/// Its strength decays linearly with age and reaches zero at `max_age`,
/// after which it is eligible for removal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Impulse<F: Float> {
    pub origin: Vec2<F>,
    pub start_time: F,
    pub max_age: F,
}

impl<F: Float> Impulse<F> {
    pub fn new(origin: Vec2<F>, start_time: F, max_age: F) -> Self {
        Impulse { origin, start_time, max_age }
    }

    /// Time elapsed since the impulse was triggered. Negative if it starts later.
    pub fn age(&self, now: F) -> F {
        now - self.start_time
    }

    pub fn is_expired(&self, now: F) -> bool {
        self.age(now) >= self.max_age
    }

    /// True while the impulse can push points: started and not yet expired.
    pub fn is_active(&self, now: F) -> bool {
        let age = self.age(now);
        age >= F::zero() && age < self.max_age
    }

    /// Strength multiplier in `[0, 1]`: `1 - age / max_age` while active, else 0.
    pub fn decay(&self, now: F) -> F {
        if !self.is_active(now) {
            return F::zero();
        }
        (F::one() - self.age(now) / self.max_age).clamp(F::zero(), F::one())
    }

    /// Radius of the expanding ring at `now`.
    pub fn radius(&self, now: F, speed: F) -> F {
        self.age(now).max(F::zero()) * speed
    }
}
