//! Frame Loop
//!
//! The driver for one effect run. Each tick: release any group whose
//! schedule condition is met and make its characters visible, render one
//! frame, advance every active character, then retire the ones the stage
//! reports done. The loop ends when nothing is pending and nothing is
//! active. Ticks are strictly sequential; a tick is the unit of atomicity.

use crate::lifecycle::LifecycleSet;
use crate::stage::Stage;

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Characters are still pending or animating
    Running,
    /// Every character has settled
    Done,
}

/// Drives the lifecycle partitions against a stage, one tick at a time.
///
/// Built by an effect's `prepare` function after the preparation phase has
/// registered all paths and scenes with the stage.
#[derive(Debug)]
pub struct EffectRunner {
    lifecycle: LifecycleSet,
    state: RunState,
}

impl EffectRunner {
    /// Create a runner over prepared lifecycle partitions
    #[must_use]
    pub fn new(lifecycle: LifecycleSet) -> Self {
        Self {
            lifecycle,
            state: RunState::Running,
        }
    }

    /// Current loop state
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The lifecycle partitions, for inspection
    #[must_use]
    pub fn lifecycle(&self) -> &LifecycleSet {
        &self.lifecycle
    }

    /// Execute one tick: activate → render → advance → reap.
    ///
    /// If the run is already complete this is a no-op returning
    /// [`RunState::Done`] without rendering, so an empty character
    /// collection produces zero frames.
    pub fn tick<S: Stage + ?Sized>(&mut self, stage: &mut S) -> RunState {
        if self.state == RunState::Done || self.lifecycle.is_done() {
            self.state = RunState::Done;
            return self.state;
        }

        if let Some(released) = self.lifecycle.release_next_group() {
            for &id in released {
                stage.set_visible(id, true);
            }
        }

        stage.render_frame();

        // Advance in activation order; the order is stable across runs so
        // output is reproducible.
        let active: Vec<_> = self.lifecycle.active().to_vec();
        for id in active {
            stage.tick_character(id);
        }

        self.lifecycle.reap_finished(stage);

        if self.lifecycle.is_done() {
            tracing::debug!(
                settled = self.lifecycle.settled().len(),
                "effect run complete"
            );
            self.state = RunState::Done;
        }
        self.state
    }

    /// Run ticks until every character has settled.
    ///
    /// A stage that never reports a character dead makes this loop forever;
    /// the engine has no timeout by design.
    pub fn run<S: Stage + ?Sized>(&mut self, stage: &mut S) {
        while self.tick(stage) == RunState::Running {}
    }

    /// Run ticks while `keep_going` returns true, for hosts that need an
    /// early exit; the predicate is checked at the top of every tick.
    pub fn run_while<S, F>(&mut self, stage: &mut S, mut keep_going: F) -> RunState
    where
        S: Stage + ?Sized,
        F: FnMut() -> bool,
    {
        while keep_going() && self.tick(stage) == RunState::Running {}
        self.state
    }
}
