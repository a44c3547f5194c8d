//! Acceleration of a sphere under drag and gravity.

use nalgebra::Vector2;

use crate::atmosphere::simple_atmosphere;
use crate::constants::M_TO_KM;
use crate::drag::cd_sphere;
use crate::profile::PhysicalConstants;
use crate::reynolds::{air_viscosity, reynolds_number};

/// Compute the acceleration of a spherical projectile moving through air.
///
/// Mach number is assumed small enough that wave drag may be neglected and
/// the added-mass term is ignored. Drag opposes the velocity; gravity acts
/// along -y.
///
/// `time` is unused by this model and kept for interface symmetry with
/// time-varying models. A velocity of exactly zero has no direction and
/// yields a NaN acceleration; callers must never launch at zero speed.
///
/// # Arguments
/// * `position` - Position in meters; `y` is altitude
/// * `velocity` - Velocity in m/s
/// * `constants` - Projectile and environment constants
pub fn acceleration(
    _time: f64,
    position: &Vector2<f64>,
    velocity: &Vector2<f64>,
    constants: &PhysicalConstants,
) -> Vector2<f64> {
    let speed_sq = velocity.norm_squared();
    let speed = speed_sq.sqrt();
    let unit_velocity = velocity / speed;

    // The atmosphere model takes kilometers
    let atmo = simple_atmosphere(M_TO_KM * position.y);
    let density = atmo.density * constants.sea_level_density_kg_m3;

    // Dynamic pressure
    let q = 0.5 * density * speed_sq;
    let re = reynolds_number(density, speed, constants.diameter_m, air_viscosity(atmo.temperature));
    let drag = cd_sphere(re) * q * constants.frontal_area_m2;

    -unit_velocity * (drag / constants.mass_kg) - Vector2::new(0.0, constants.gravity_m_s2)
}
