// src/simulation/animation.rs

use crate::model::chain::AnimatedChain;
use crate::model::lattice::LatticeParameters;
use crate::physics::dispersion::DispersionError;
use crate::rendering::surface::{ChainCanvas, FrameHandle, FrameScheduler};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Rendered,
    /// The dispersion is singular at the current q; atoms keep their last positions
    Skipped(DispersionError),
    /// Clock not running
    Idle,
}

/// Time origin plus the one live frame registration driving both chains.
#[derive(Debug, Default)]
pub struct AnimationClock {
    origin: Option<f64>,
    registration: Option<FrameHandle>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.registration.is_some()
    }

    /// Resets the phase origin to `now` and swaps the frame registration.
    /// The previous registration is always cancelled before a new one exists.
    pub fn restart<S: FrameScheduler>(&mut self, scheduler: &mut S, now: f64) {
        if let Some(handle) = self.registration.take() {
            scheduler.cancel_frame_callback(handle);
        }
        self.origin = Some(now);
        self.registration = Some(scheduler.register_frame_callback());
    }

    pub fn stop<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.registration.take() {
            scheduler.cancel_frame_callback(handle);
        }
        self.origin = None;
    }

    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.origin.map(|origin| (now - origin).max(0.0))
    }

    /// One frame: evaluates the dispersion once and moves both chains.
    pub fn tick<C: ChainCanvas>(
        &self,
        now: f64,
        params: &LatticeParameters,
        optical: &mut AnimatedChain<C>,
        acoustic: &mut AnimatedChain<C>,
    ) -> FrameOutcome {
        let Some(t) = self.elapsed(now) else {
            return FrameOutcome::Idle;
        };

        let dispersion = match params.try_dispersion() {
            Ok(d) => d,
            Err(e) => return FrameOutcome::Skipped(e),
        };

        optical.place(&dispersion, params.wavenumber, t);
        acoustic.place(&dispersion, params.wavenumber, t);
        FrameOutcome::Rendered
    }
}
