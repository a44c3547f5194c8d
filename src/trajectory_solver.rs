//! Batch trajectory generation.
//!
//! A launch is integrated with fixed RK4 steps until the projectile returns
//! to (or crosses below) its starting altitude. The last point is then
//! replaced by a linear interpolation between the two points straddling the
//! starting altitude, so the trajectory ends exactly on it.

use log::{debug, warn};

use crate::constants::{DEFAULT_MAX_STEPS, DEFAULT_TIME_STEP_S};
use crate::error::TrajectoryError;
use crate::profile::PhysicalConstants;
use crate::rk4::rk4_step;
use crate::trajectory_point::TrajectoryPoint;

/// Batch generator settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Fixed integration step (s)
    pub time_step_s: f64,
    /// Re-base altitudes so the launch altitude reads as zero
    pub normalized: bool,
    /// Iteration cap for the boundary-crossing loop
    pub max_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_step_s: DEFAULT_TIME_STEP_S,
            normalized: true,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Interpolate the terminal point so its altitude equals `boundary_m`.
///
/// `a1` and `a2` must straddle the boundary: `a1` above it and `a2` at or
/// below. The same fraction is applied to time, position, velocity and
/// acceleration.
pub fn correct_final_position(
    boundary_m: f64,
    a1: &TrajectoryPoint,
    a2: &TrajectoryPoint,
) -> TrajectoryPoint {
    let fraction = (boundary_m - a1.position.y) / (a2.position.y - a1.position.y);
    TrajectoryPoint {
        time: a1.time + fraction * (a2.time - a1.time),
        position: a1.position + (a2.position - a1.position) * fraction,
        velocity: a1.velocity + (a2.velocity - a1.velocity) * fraction,
        acceleration: a1.acceleration + (a2.acceleration - a1.acceleration) * fraction,
    }
}

/// Ordered, time-ascending sequence of points produced by one batch run.
///
/// The first point is the launch condition and the last lies exactly on the
/// launch altitude (zero when normalized). Read-only once built; a parameter
/// change means solving a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajectoryPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    /// Highest point of the trajectory
    pub fn apex(&self) -> &TrajectoryPoint {
        let mut apex = self.first();
        for point in &self.points {
            if point.position.y > apex.position.y {
                apex = point;
            }
        }
        apex
    }

    pub fn time_of_flight(&self) -> f64 {
        self.last().time
    }

    /// Horizontal distance covered
    pub fn range(&self) -> f64 {
        self.last().position.x - self.first().position.x
    }

    pub fn impact_speed(&self) -> f64 {
        self.last().speed()
    }

    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Batch trajectory generator for one projectile profile
#[derive(Debug, Clone)]
pub struct TrajectorySolver {
    constants: PhysicalConstants,
    config: SolverConfig,
}

impl TrajectorySolver {
    pub fn new(constants: PhysicalConstants, config: SolverConfig) -> Self {
        Self { constants, config }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.config.time_step_s = step;
    }

    pub fn set_normalized(&mut self, normalized: bool) {
        self.config.normalized = normalized;
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.config.max_steps = max_steps;
    }

    /// Compute the trajectory of a launch.
    ///
    /// # Arguments
    /// * `altitude_m` - Launch altitude, also the terminating boundary
    /// * `velocity_mps` - Launch speed
    /// * `angle_deg` - Launch angle above horizontal
    ///
    /// A launch at or below horizontal crosses the boundary on the first
    /// step and interpolates back onto the seed: the result is two equal
    /// points, both at `t = 0`.
    pub fn solve(
        &self,
        altitude_m: f64,
        velocity_mps: f64,
        angle_deg: f64,
    ) -> Result<Trajectory, TrajectoryError> {
        validate_launch(altitude_m, velocity_mps, angle_deg)?;
        let dt = self.config.time_step_s;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(TrajectoryError::InvalidTimeStep(dt));
        }

        debug!(
            "solving trajectory: altitude={:.2} m, velocity={:.2} m/s, angle={:.2} deg, dt={}",
            altitude_m, velocity_mps, angle_deg, dt
        );

        let mut points = vec![TrajectoryPoint::launch(
            altitude_m,
            angle_deg,
            velocity_mps,
            &self.constants,
        )];

        loop {
            let steps = points.len() - 1;
            if steps >= self.config.max_steps {
                let last_altitude_m = points[steps].position.y;
                warn!(
                    "trajectory did not return to {:.2} m within {} steps",
                    altitude_m, steps
                );
                return Err(TrajectoryError::Unresolved { steps, last_altitude_m });
            }

            let next = rk4_step(&points[steps], dt, &self.constants);
            if !next.is_finite() {
                warn!("non-finite state after {} steps", steps + 1);
                return Err(TrajectoryError::NonFiniteState { step: steps + 1 });
            }
            let crossed = next.position.y <= altitude_m;
            points.push(next);
            if crossed {
                break;
            }
        }

        let n = points.len();
        let (a1, a2) = (&points[n - 2], &points[n - 1]);
        // The crossing segment must descend, otherwise the fraction is undefined
        if a2.position.y >= a1.position.y {
            warn!("boundary crossed on a non-descending segment at t={:.3} s", a2.time);
            return Err(TrajectoryError::Unresolved {
                steps: n - 1,
                last_altitude_m: a2.position.y,
            });
        }
        let corrected = correct_final_position(altitude_m, a1, a2);
        points[n - 1] = corrected;

        if self.config.normalized {
            for point in points.iter_mut() {
                point.position.y -= altitude_m;
            }
        }

        let trajectory = Trajectory { points };
        debug!(
            "trajectory resolved: {} points, time of flight {:.3} s, apex {:.3} m",
            trajectory.len(),
            trajectory.time_of_flight(),
            trajectory.apex().position.y
        );
        Ok(trajectory)
    }
}

/// Compute a trajectory with an explicit step and normalization flag.
pub fn trajectory(
    altitude_m: f64,
    velocity_mps: f64,
    angle_deg: f64,
    dt: f64,
    normalized: bool,
    constants: &PhysicalConstants,
) -> Result<Trajectory, TrajectoryError> {
    let config = SolverConfig {
        time_step_s: dt,
        normalized,
        ..Default::default()
    };
    TrajectorySolver::new(*constants, config).solve(altitude_m, velocity_mps, angle_deg)
}

pub(crate) fn validate_launch(
    altitude_m: f64,
    velocity_mps: f64,
    angle_deg: f64,
) -> Result<(), TrajectoryError> {
    for (name, value) in [
        ("altitude", altitude_m),
        ("velocity", velocity_mps),
        ("angle", angle_deg),
    ] {
        if !value.is_finite() {
            return Err(TrajectoryError::NonFiniteInput { name, value });
        }
    }
    if velocity_mps == 0.0 {
        return Err(TrajectoryError::ZeroLaunchSpeed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn point(time: f64, x: f64, y: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            time,
            position: Vector2::new(x, y),
            velocity: Vector2::new(10.0 * time, -time),
            acceleration: Vector2::new(-1.0, -9.8 - time),
        }
    }

    #[test]
    fn test_correct_final_position_lands_on_boundary() {
        let a1 = point(1.0, 100.0, 4.0);
        let a2 = point(2.0, 200.0, -6.0);
        let c = correct_final_position(0.0, &a1, &a2);
        assert_eq!(c.position.y, 0.0);
        assert!((c.time - 1.4).abs() < 1e-12);
        assert!((c.position.x - 140.0).abs() < 1e-12);
        assert!((c.velocity.x - 14.0).abs() < 1e-12);
        assert!((c.acceleration.y - -11.2).abs() < 1e-12);
    }

    #[test]
    fn test_correct_final_position_is_pure() {
        let a1 = point(1.0, 100.0, 4.0);
        let a2 = point(2.0, 200.0, -6.0);
        assert_eq!(
            correct_final_position(0.5, &a1, &a2),
            correct_final_position(0.5, &a1, &a2)
        );
    }

    #[test]
    fn test_solve_ends_on_launch_altitude() {
        let solver = TrajectorySolver::new(
            PhysicalConstants::baseball(),
            SolverConfig { normalized: false, ..Default::default() },
        );
        let traj = solver.solve(1609.0, 35.0, 40.0).unwrap();
        assert!((traj.last().position.y - 1609.0).abs() < 1e-6);
        assert_eq!(traj.first().position.y, 1609.0);
        assert!(traj.apex().position.y > 1609.0);
    }

    #[test]
    fn test_normalized_rebases_altitude() {
        let c = PhysicalConstants::baseball();
        let raw = trajectory(1609.0, 35.0, 40.0, 0.1, false, &c).unwrap();
        let norm = trajectory(1609.0, 35.0, 40.0, 0.1, true, &c).unwrap();
        assert_eq!(raw.len(), norm.len());
        assert_eq!(norm.first().position.y, 0.0);
        for (r, n) in raw.iter().zip(norm.iter()) {
            assert!((r.position.y - 1609.0 - n.position.y).abs() < 1e-9);
            assert_eq!(r.position.x, n.position.x);
            assert_eq!(r.velocity, n.velocity);
        }
    }

    #[test]
    fn test_interior_points_are_rk4_results() {
        let c = PhysicalConstants::cannonball();
        let traj = trajectory(0.0, 100.0, 40.0, 0.1, false, &c).unwrap();
        let pts = traj.points();
        for i in 1..pts.len() - 1 {
            assert_eq!(pts[i], rk4_step(&pts[i - 1], 0.1, &c));
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let c = PhysicalConstants::cannonball();
        assert_eq!(
            trajectory(0.0, 0.0, 40.0, 0.1, true, &c),
            Err(TrajectoryError::ZeroLaunchSpeed)
        );
        assert_eq!(
            trajectory(0.0, 10.0, 40.0, 0.0, true, &c),
            Err(TrajectoryError::InvalidTimeStep(0.0))
        );
        assert!(matches!(
            trajectory(f64::NAN, 10.0, 40.0, 0.1, true, &c),
            Err(TrajectoryError::NonFiniteInput { name: "altitude", .. })
        ));
    }

    #[test]
    fn test_iteration_cap_reports_unresolved() {
        let mut solver = TrajectorySolver::new(PhysicalConstants::cannonball(), SolverConfig::default());
        solver.set_max_steps(5);
        match solver.solve(0.0, 100.0, 80.0) {
            Err(TrajectoryError::Unresolved { steps, last_altitude_m }) => {
                assert_eq!(steps, 5);
                assert!(last_altitude_m > 0.0);
            }
            other => panic!("expected Unresolved, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_values() {
        let c = PhysicalConstants::cannonball().with_sea_level_density(0.0);
        let traj = trajectory(0.0, 100.0, 45.0, 0.01, true, &c).unwrap();
        let g = c.gravity_m_s2;
        let vy = 100.0 * 45f64.to_radians().sin();
        // Linear interpolation of the final crossing is good to O(dt²)
        assert!((traj.time_of_flight() - 2.0 * vy / g).abs() < 1e-4);
        assert!((traj.range() - 100.0 * 100.0 / g).abs() < 1e-2);
        assert!((traj.apex().position.y - vy * vy / (2.0 * g)).abs() < 0.01);
        assert!((traj.impact_speed() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_level_flight_without_gravity_is_unresolved() {
        let c = PhysicalConstants::cannonball()
            .with_sea_level_density(0.0)
            .with_gravity(0.0);
        match trajectory(0.0, 100.0, 0.0, 0.1, true, &c) {
            Err(TrajectoryError::Unresolved { steps, last_altitude_m }) => {
                assert_eq!(steps, 1);
                assert_eq!(last_altitude_m, 0.0);
            }
            other => panic!("expected Unresolved, got {:?}", other),
        }
    }

    #[test]
    fn test_runaway_state_is_non_finite() {
        let c = PhysicalConstants::cannonball().with_gravity(-1.0);
        assert!(matches!(
            trajectory(0.0, 100.0, 40.0, 0.1, true, &c),
            Err(TrajectoryError::NonFiniteState { .. })
        ));
    }

    #[test]
    fn test_downward_launch_collapses_to_seed() {
        let c = PhysicalConstants::cannonball();
        for angle in [0.0, -10.0] {
            let traj = trajectory(50.0, 100.0, angle, 0.1, false, &c).unwrap();
            assert_eq!(traj.len(), 2);
            assert_eq!(traj.points()[1], traj.points()[0]);
            assert_eq!(traj.last().time, 0.0);
            assert_eq!(traj.last().position.y, 50.0);
        }
    }
}
