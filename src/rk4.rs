//! Fourth-order Runge-Kutta step for the coupled position/velocity system.
//!
//! Position's derivative is velocity and velocity's derivative is the
//! acceleration function, giving four first-order ODEs in 2D.

use nalgebra::Vector2;

use crate::derivatives::acceleration;
use crate::profile::PhysicalConstants;
use crate::trajectory_point::TrajectoryPoint;

/// Advance one trajectory point by a fixed time step `h`.
///
/// The stages evaluate the acceleration at the start of the interval, twice
/// at its midpoint and once at its end, combined with weights 1, 2, 2, 1 / 6.
/// The returned point's acceleration is recomputed at the final state.
pub fn rk4_step(p1: &TrajectoryPoint, h: f64, constants: &PhysicalConstants) -> TrajectoryPoint {
    let t = p1.time;
    let x = p1.position;
    let v = p1.velocity;
    let half = h / 2.0;

    // Start of interval
    let a1 = acceleration(t, &x, &v, constants);
    let dx1 = v * h;
    let dv1 = a1 * h;

    // Midpoint with slopes dx1/dv1
    let x2 = x + dx1 / 2.0;
    let v2 = v + dv1 / 2.0;
    let a2 = acceleration(t + half, &x2, &v2, constants);
    let dx2 = v2 * h;
    let dv2 = a2 * h;

    // Midpoint with slopes dx2/dv2
    let x3 = x + dx2 / 2.0;
    let v3 = v + dv2 / 2.0;
    let a3 = acceleration(t + half, &x3, &v3, constants);
    let dx3 = v3 * h;
    let dv3 = a3 * h;

    // End of interval
    let x4 = x + dx3;
    let v4 = v + dv3;
    let a4 = acceleration(t + h, &x4, &v4, constants);
    let dx4 = v4 * h;
    let dv4 = a4 * h;

    let position = x + weighted(&dx1, &dx2, &dx3, &dx4);
    let velocity = v + weighted(&dv1, &dv2, &dv3, &dv4);

    TrajectoryPoint::new(t + h, position, velocity, constants)
}

#[inline]
fn weighted(k1: &Vector2<f64>, k2: &Vector2<f64>, k3: &Vector2<f64>, k4: &Vector2<f64>) -> Vector2<f64> {
    (k1 + k2 + k2 + k3 + k3 + k4) / 6.0
}
