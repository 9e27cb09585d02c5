//! Point masses pulled back toward a fixed rest position.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated point. Explicit Euler: velocity is stored, not implied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<F: Float> {
    pub rest: Vec2<F>,
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Point<F> {
    /// A free point at rest.
    pub fn new(rest: Vec2<F>) -> Self {
        Point { rest, pos: rest, vel: Vec2::zero(), pinned: false }
    }

    /// A point that never moves from `rest`.
    pub fn pinned(rest: Vec2<F>) -> Self {
        Point { rest, pos: rest, vel: Vec2::zero(), pinned: true }
    }

    pub fn with_pinned(rest: Vec2<F>, pinned: bool) -> Self {
        if pinned { Self::pinned(rest) } else { Self::new(rest) }
    }

    /// `vel = vel * damping + force; pos += vel`. Pinned points are skipped.
    pub fn integrate(&mut self, force: Vec2<F>, damping: F) {
        if self.pinned {
            return;
        }
        self.vel = self.vel.scale(damping) + force;
        self.pos += self.vel;
    }

    /// Offset from rest position.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.rest
    }

    /// `|vel|²`, unit mass.
    pub fn kinetic_energy(&self) -> F {
        self.vel.length_sq()
    }

    pub fn reset(&mut self) {
        self.pos = self.rest;
        self.vel = Vec2::zero();
    }
}
