//! Step observer trait for monitoring the per-frame pipeline.

/// Trait for observing simulation steps.
///
/// Each hook fires once per [`crate::world::World::step`], right after the
/// stage it names has run for every body. All methods default to no-ops.
pub trait StepObserver {
    /// Called after every body integrated its masses and refreshed its center.
    fn on_integrate(&mut self) {}

    /// Called after box obstacles and bounds were resolved.
    fn on_box_collisions(&mut self, _contacts: usize) {}

    /// Called after body-body collisions were resolved.
    fn on_body_collisions(&mut self, _contacts: usize) {}

    /// Called after spring relaxation (and crossing avoidance, when enabled).
    fn on_springs(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every stage boundary to `tracing` at TRACE level.
#[derive(Debug, Default)]
pub struct TracingObserver {
    step: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver { step: 0 }
    }

    /// Number of completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.step
    }
}

impl StepObserver for TracingObserver {
    fn on_integrate(&mut self) {
        tracing::trace!(step = self.step, "masses integrated");
    }

    fn on_box_collisions(&mut self, contacts: usize) {
        tracing::trace!(step = self.step, contacts, "box collisions resolved");
    }

    fn on_body_collisions(&mut self, contacts: usize) {
        tracing::trace!(step = self.step, contacts, "body collisions resolved");
    }

    fn on_springs(&mut self) {
        tracing::trace!(step = self.step, "springs relaxed");
    }

    fn on_step_complete(&mut self) {
        tracing::trace!(step = self.step, "step complete");
        self.step += 1;
    }
}
