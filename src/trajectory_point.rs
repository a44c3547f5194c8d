//! Trajectory samples and launch seeding.

use nalgebra::Vector2;

use crate::derivatives::acceleration;
use crate::profile::PhysicalConstants;

/// One sample of a trajectory.
///
/// `acceleration` is always the value of [`acceleration`] for exactly this
/// time, position and velocity; points are only built through constructors
/// that compute it, interpolation between two such points, or the RK4 step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Seconds since launch
    pub time: f64,
    /// Meters; `y` is altitude
    pub position: Vector2<f64>,
    /// m/s
    pub velocity: Vector2<f64>,
    /// m/s²
    pub acceleration: Vector2<f64>,
}

impl TrajectoryPoint {
    /// Build a point, computing the cached acceleration from the state.
    pub fn new(
        time: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        constants: &PhysicalConstants,
    ) -> Self {
        Self {
            time,
            position,
            velocity,
            acceleration: acceleration(time, &position, &velocity, constants),
        }
    }

    /// Initial condition of a launch at `t = 0` from `(0, altitude)`.
    ///
    /// # Arguments
    /// * `altitude_m` - Launch altitude in meters
    /// * `angle_deg` - Launch angle in degrees above horizontal
    /// * `speed_mps` - Launch speed in m/s; must be nonzero
    pub fn launch(
        altitude_m: f64,
        angle_deg: f64,
        speed_mps: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        let angle_rad = angle_deg.to_radians();
        let position = Vector2::new(0.0, altitude_m);
        let velocity = Vector2::new(speed_mps * angle_rad.cos(), speed_mps * angle_rad.sin());
        Self::new(0.0, position, velocity, constants)
    }

    #[inline]
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.position.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
            && self.acceleration.iter().all(|c| c.is_finite())
    }
}
