//! The spring point field: points, active impulses and a simulation clock.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::float::Float;
use crate::forces::{external_force, spring_force};
use crate::impulse::Impulse;
use crate::layout::Layout;
use crate::observer::StepObserver;
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Energy and displacement summary after a step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StepStats<F: Float> {
    /// Free points integrated this step (0 on a no-op tick).
    pub integrated: usize,
    /// Impulses dropped because they reached their max age.
    pub pruned: usize,
    /// `Σ |vel|²`.
    pub kinetic_energy: F,
    /// `Σ stiffness * |pos - rest|²`.
    pub spring_energy: F,
    /// Largest `|pos - rest|` over all points.
    pub max_displacement: F,
}

impl<F: Float> StepStats<F> {
    pub fn total_energy(&self) -> F {
        self.kinetic_energy + self.spring_energy
    }
}

/// Positions handed to the renderer, stamped with the simulation time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<F: Float> {
    pub time: F,
    pub positions: AllocVec<Vec2<F>>,
}

/// A set of points pulled toward their rest positions, pushed by an optional
/// pointer, and disturbed by expanding ripple impulses.
///
/// Integration is per tick: `dt` only drives the clock that ages impulses,
/// so motion depends on the number of ticks, not their length.
///
/// ```
/// use springfield::{FieldConfig, GridLayout, NoOpStepObserver, SpringPointField, Vec2};
///
/// let layout = GridLayout::new(8, 8, 20.0f32).with_pinned_boundary();
/// let mut field = SpringPointField::new(layout.points(Vec2::zero()), FieldConfig::new()).unwrap();
///
/// field.trigger_impulse_now(Vec2::new(70.0, 70.0));
/// for _ in 0..60 {
///     field.step(1.0 / 60.0, Some(Vec2::new(10.0, 10.0)), &mut NoOpStepObserver);
/// }
/// assert_eq!(field.positions().len(), 64);
/// ```
pub struct SpringPointField<F: Float> {
    points: AllocVec<Point<F>>,
    impulses: AllocVec<Impulse<F>>,
    config: FieldConfig<F>,
    time: F,
}

impl<F: Float> SpringPointField<F> {
    /// Build a field at rest from `(rest position, pinned)` pairs.
    ///
    /// An empty layout is legal and yields a field whose steps do nothing.
    pub fn new(layout: Layout<F>, config: FieldConfig<F>) -> Result<Self, FieldError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected field config: {}", err);
            return Err(err);
        }
        let points: AllocVec<Point<F>> = layout
            .into_iter()
            .map(|(rest, pinned)| Point::with_pinned(rest, pinned))
            .collect();
        log::debug!(
            "created spring field with {} point(s), {} pinned",
            points.len(),
            points.iter().filter(|p| p.pinned).count(),
        );
        Ok(SpringPointField {
            points,
            impulses: AllocVec::new(),
            config,
            time: F::zero(),
        })
    }

    /// Advance one tick using the field's own impulses.
    ///
    /// A non-positive or non-finite `dt` is a no-op tick: the clock does not
    /// move, nothing integrates and the observer is not called. A non-finite
    /// pointer counts as no pointer.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        dt: F,
        pointer: Option<Vec2<F>>,
        observer: &mut O,
    ) -> StepStats<F> {
        if !self.advance_clock(dt) {
            return self.stats(0, 0);
        }

        let pruned = self.prune_expired();
        observer.on_impulses_pruned(pruned);

        let integrated = integrate_points(
            &mut self.points,
            pointer,
            &self.impulses,
            self.time,
            &self.config,
        );
        observer.on_integrate(integrated);

        let stats = self.stats(integrated, pruned);
        observer.on_step_complete(&stats);
        stats
    }

    /// Advance one tick with impulses owned by the caller.
    ///
    /// The field's own impulse list is neither used nor pruned; expired
    /// entries in `impulses` simply contribute nothing.
    pub fn step_with<O: StepObserver<F>>(
        &mut self,
        dt: F,
        pointer: Option<Vec2<F>>,
        impulses: &[Impulse<F>],
        observer: &mut O,
    ) -> StepStats<F> {
        if !self.advance_clock(dt) {
            return self.stats(0, 0);
        }

        observer.on_impulses_pruned(0);
        let integrated = integrate_points(&mut self.points, pointer, impulses, self.time, &self.config);
        observer.on_integrate(integrated);

        let stats = self.stats(integrated, 0);
        observer.on_step_complete(&stats);
        stats
    }

    fn advance_clock(&mut self, dt: F) -> bool {
        if !dt.is_finite() || dt <= F::zero() {
            return false;
        }
        self.time = self.time + dt;
        true
    }

    /// Start a ripple at `origin` at time `now`, living `max_impulse_age`.
    ///
    /// Impulses are never merged; overlapping ripples add up.
    pub fn trigger_impulse(&mut self, origin: Vec2<F>, now: F) {
        self.push_impulse(Impulse::new(origin, now, self.config.max_impulse_age));
    }

    /// Start a ripple at `origin` at the field's current time.
    pub fn trigger_impulse_now(&mut self, origin: Vec2<F>) {
        self.trigger_impulse(origin, self.time);
    }

    /// Append an impulse with its own lifetime. Non-finite impulses are dropped.
    pub fn push_impulse(&mut self, impulse: Impulse<F>) {
        if !impulse.origin.is_finite() || !impulse.start_time.is_finite() || !impulse.max_age.is_finite() {
            log::warn!("ignored non-finite impulse {:?}", impulse);
            return;
        }
        log::trace!(
            "impulse at ({}, {}) t={} max_age={}",
            impulse.origin.x,
            impulse.origin.y,
            impulse.start_time,
            impulse.max_age,
        );
        self.impulses.push(impulse);
    }

    /// Drop impulses whose age reached their max age. Returns how many were dropped.
    pub fn prune_expired(&mut self) -> usize {
        let before = self.impulses.len();
        let now = self.time;
        self.impulses.retain(|imp| !imp.is_expired(now));
        before - self.impulses.len()
    }

    pub fn active_impulses(&self) -> &[Impulse<F>] {
        &self.impulses
    }

    pub fn clear_impulses(&mut self) {
        self.impulses.clear();
    }

    /// Replace every point with a new layout, e.g. after a resize.
    ///
    /// The clock and active impulses are kept.
    pub fn relayout(&mut self, layout: Layout<F>) {
        self.points = layout
            .into_iter()
            .map(|(rest, pinned)| Point::with_pinned(rest, pinned))
            .collect();
        log::debug!("relayout: {} point(s)", self.points.len());
    }

    /// Put every point back at rest and drop all impulses. The clock keeps running.
    pub fn reset(&mut self) {
        for p in self.points.iter_mut() {
            p.reset();
        }
        self.impulses.clear();
        log::debug!("reset {} point(s) to rest", self.points.len());
    }

    /// Swap in new tunables. The old config stays if the new one is invalid.
    pub fn set_config(&mut self, config: FieldConfig<F>) -> Result<(), FieldError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected field config: {}", err);
            return Err(err);
        }
        self.config = config;
        log::debug!("field config updated");
        Ok(())
    }

    /// Move a free point, e.g. to seed a disturbance. Pinned points refuse.
    pub fn set_position(&mut self, index: usize, pos: Vec2<F>) -> Result<(), FieldError> {
        if !pos.is_finite() {
            return Err(FieldError::NonFiniteValue);
        }
        self.free_point_mut(index)?.pos = pos;
        Ok(())
    }

    /// Give a free point a velocity. Pinned points refuse.
    pub fn set_velocity(&mut self, index: usize, vel: Vec2<F>) -> Result<(), FieldError> {
        if !vel.is_finite() {
            return Err(FieldError::NonFiniteValue);
        }
        self.free_point_mut(index)?.vel = vel;
        Ok(())
    }

    fn free_point_mut(&mut self, index: usize) -> Result<&mut Point<F>, FieldError> {
        let count = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(FieldError::PointOutOfBounds { index, count })?;
        if point.pinned {
            return Err(FieldError::PointPinned { index });
        }
        Ok(point)
    }

    /// Current positions in layout order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        Snapshot { time: self.time, positions: self.positions() }
    }

    pub fn position(&self, index: usize) -> Option<Vec2<F>> {
        self.points.get(index).map(|p| p.pos)
    }

    pub fn point(&self, index: usize) -> Option<&Point<F>> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn time(&self) -> F {
        self.time
    }

    pub fn config(&self) -> &FieldConfig<F> {
        &self.config
    }

    /// `Σ |vel|²` over all points.
    pub fn kinetic_energy(&self) -> F {
        self.points.iter().fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }

    /// `Σ stiffness * |pos - rest|²` over all points.
    pub fn spring_energy(&self) -> F {
        let k = self.config.stiffness;
        self.points
            .iter()
            .fold(F::zero(), |acc, p| acc + k * p.displacement().length_sq())
    }

    pub fn max_displacement(&self) -> F {
        self.points
            .iter()
            .fold(F::zero(), |acc, p| acc.max(p.displacement().length()))
    }

    /// True when every point is within `epsilon` of rest and moving slower than `epsilon`.
    pub fn is_settled(&self, epsilon: F) -> bool {
        let eps_sq = epsilon * epsilon;
        self.points
            .iter()
            .all(|p| p.displacement().length_sq() < eps_sq && p.vel.length_sq() < eps_sq)
    }

    fn stats(&self, integrated: usize, pruned: usize) -> StepStats<F> {
        StepStats {
            integrated,
            pruned,
            kinetic_energy: self.kinetic_energy(),
            spring_energy: self.spring_energy(),
            max_displacement: self.max_displacement(),
        }
    }
}

/// Sum spring and external forces for every free point and integrate it.
fn integrate_points<F: Float>(
    points: &mut [Point<F>],
    pointer: Option<Vec2<F>>,
    impulses: &[Impulse<F>],
    now: F,
    config: &FieldConfig<F>,
) -> usize {
    let pointer = pointer.filter(|p| p.is_finite());
    let mut integrated = 0;
    for p in points.iter_mut().filter(|p| !p.pinned) {
        let force = spring_force(p, config.stiffness) + external_force(p, pointer, impulses, now, config);
        p.integrate(force, config.damping);
        integrated += 1;
    }
    integrated
}
