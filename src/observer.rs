//! Step observer trait for monitoring the simulation.

use crate::field::StepStats;
use crate::float::Float;

/// Hooks called by [`SpringPointField::step`](crate::field::SpringPointField::step).
///
/// Implement this trait to monitor the field (debug overlays, profiling,
/// settle detection). All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after expired impulses were dropped, with the number removed.
    fn on_impulses_pruned(&mut self, _count: usize) {}

    /// Called after all free points have been integrated.
    fn on_integrate(&mut self, _integrated: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self, _stats: &StepStats<F>) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Forwards every hook to the `log` facade at trace level.
///
/// The host decides where records go by installing a logger.
pub struct LogStepObserver;

impl<F: Float> StepObserver<F> for LogStepObserver {
    fn on_impulses_pruned(&mut self, count: usize) {
        if count > 0 {
            log::trace!("pruned {} expired impulse(s)", count);
        }
    }

    fn on_integrate(&mut self, integrated: usize) {
        log::trace!("integrated {} free point(s)", integrated);
    }

    fn on_step_complete(&mut self, stats: &StepStats<F>) {
        log::trace!(
            "step complete: kinetic={} spring={} max_displacement={}",
            stats.kinetic_energy,
            stats.spring_energy,
            stats.max_displacement,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        steps: usize,
    }

    impl StepObserver<f32> for Counter {
        fn on_step_complete(&mut self, _stats: &StepStats<f32>) {
            self.steps += 1;
        }
    }

    #[test]
    fn default_hooks_are_callable() {
        let mut counter = Counter::default();
        counter.on_impulses_pruned(3);
        counter.on_integrate(10);
        counter.on_step_complete(&StepStats::default());
        assert_eq!(counter.steps, 1);
    }
}
