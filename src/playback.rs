//! Launch parameters and looping playback of a solved trajectory.

use log::debug;

use crate::error::TrajectoryError;
use crate::trajectory_point::TrajectoryPoint;
use crate::trajectory_solver::{validate_launch, Trajectory, TrajectorySolver};

/// User-adjustable launch inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub altitude_m: f64,
    pub angle_deg: f64,
    pub velocity_mps: f64,
}

impl LaunchParameters {
    pub fn new(altitude_m: f64, angle_deg: f64, velocity_mps: f64) -> Self {
        Self {
            altitude_m,
            angle_deg,
            velocity_mps,
        }
    }

    /// Step the launch speed, clamped so it never drops below zero.
    pub fn nudge_velocity(&mut self, delta_mps: f64) {
        self.velocity_mps = (self.velocity_mps + delta_mps).max(0.0);
    }

    pub fn nudge_angle(&mut self, delta_deg: f64) {
        self.angle_deg += delta_deg;
    }

    pub fn validate(&self) -> Result<(), TrajectoryError> {
        validate_launch(self.altitude_m, self.velocity_mps, self.angle_deg)
    }

    pub fn solve(&self, solver: &TrajectorySolver) -> Result<Trajectory, TrajectoryError> {
        solver.solve(self.altitude_m, self.velocity_mps, self.angle_deg)
    }
}

/// Cycles through a trajectory one point per frame.
///
/// A replacement trajectory is held until the cursor wraps, so the point
/// being shown never jumps mid-flight.
#[derive(Debug, Clone)]
pub struct TrajectoryPlayback {
    current: Trajectory,
    pending: Option<Trajectory>,
    cursor: usize,
}

impl TrajectoryPlayback {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            current: trajectory,
            pending: None,
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Trajectory {
        &self.current
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue `trajectory` to start on the next wrap. Replaces any earlier queued one.
    pub fn replace(&mut self, trajectory: Trajectory) {
        self.pending = Some(trajectory);
    }

    /// Point for this frame; the cursor then moves on, wrapping at the end.
    pub fn advance(&mut self) -> TrajectoryPoint {
        let point = *self.current.get(self.cursor).unwrap_or_else(|| self.current.last());
        self.cursor += 1;
        if self.cursor >= self.current.len() {
            self.cursor = 0;
            if let Some(next) = self.pending.take() {
                debug!("playback switched to a {}-point trajectory", next.len());
                self.current = next;
            }
        }
        point
    }
}
