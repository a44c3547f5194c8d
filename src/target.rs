//! Moving targets.
//!
//! A target drifts horizontally while a motion generator turns its phase
//! into a vertical offset. Once hit it is removed for good; continuous play
//! spawns a fresh target.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::Rng;

use crate::bounds::Rect;
use crate::collision::any_hit;

/// Maps a 1D motion phase to a vertical offset.
pub trait MotionGenerator {
    fn vertical_offset(&self, phase: f64) -> f64;
}

impl<F> MotionGenerator for F
where
    F: Fn(f64) -> f64,
{
    fn vertical_offset(&self, phase: f64) -> f64 {
        self(phase)
    }
}

/// Smooth bounded wandering: the sum of two incommensurate sines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicWander {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for HarmonicWander {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            frequency: 0.25,
        }
    }
}

impl MotionGenerator for HarmonicWander {
    fn vertical_offset(&self, phase: f64) -> f64 {
        let w = TAU * self.frequency * phase;
        self.amplitude * (0.6 * w.sin() + 0.4 * (w * std::f64::consts::SQRT_2).sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Alive,
    Removed,
}

/// A target's screen-space box plus its motion phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    bounds: Rect,
    /// Center height the motion offset is applied to
    base_y: f64,
    /// Horizontal drift (units/s)
    drift_x: f64,
    phase: f64,
    state: TargetState,
}

impl Target {
    pub fn new(bounds: Rect, drift_x: f64, phase: f64) -> Self {
        let bounds = bounds.normalized();
        Self {
            base_y: bounds.center().y,
            bounds,
            drift_x,
            phase,
            state: TargetState::Alive,
        }
    }

    /// Target at `center` with a random starting phase.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2<f64>,
        half_extent: f64,
        drift_x: f64,
    ) -> Self {
        let phase = rng.gen_range(0.0..1000.0);
        Self::new(Rect::centered(center, half_extent), drift_x, phase)
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == TargetState::Alive
    }

    /// Move the target by one frame. Removed targets do not move.
    pub fn advance<M: MotionGenerator + ?Sized>(&mut self, dt: f64, motion: &M) {
        if !self.is_alive() {
            return;
        }
        self.phase += dt;
        let center = self.bounds.center();
        let y = self.base_y + motion.vertical_offset(self.phase);
        self.bounds
            .translate(&Vector2::new(self.drift_x * dt, y - center.y));
    }

    /// Test this frame's projectiles against the target.
    ///
    /// A hit moves the target to `Removed`; returns whether it was hit now.
    pub fn check_hit<'a, I>(&mut self, projectiles: I) -> bool
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        if !self.is_alive() {
            return false;
        }
        let hit = any_hit(&self.bounds, projectiles);
        if hit {
            self.state = TargetState::Removed;
        }
        hit
    }
}
