//! Air viscosity and Reynolds number.
//!
//! Viscosity follows Sutherland's formula. The Reynolds number selects the
//! flow regime used by the sphere drag curve in [`crate::drag`].

use crate::constants::{SEA_LEVEL_TEMPERATURE_K, SUTHERLAND_BETA, SUTHERLAND_CONSTANT_K};

/// Calculate dynamic viscosity of air using Sutherland's formula
///
/// μ = β·T^1.5 / (T + S)
///
/// # Arguments
/// * `temperature_ratio` - Temperature relative to the sea-level standard (dimensionless)
///
/// # Returns
/// Dynamic viscosity in kg/(m·s)
pub fn air_viscosity(temperature_ratio: f64) -> f64 {
    let temperature_k = SEA_LEVEL_TEMPERATURE_K * temperature_ratio;
    SUTHERLAND_BETA * (temperature_k * temperature_k * temperature_k).sqrt()
        / (temperature_k + SUTHERLAND_CONSTANT_K)
}

/// Calculate Reynolds number for a sphere
///
/// Re = ρ × V × d / μ
///
/// # Arguments
/// * `density_kg_m3` - Air density in kg/m³
/// * `speed_mps` - Speed relative to the air in m/s
/// * `diameter_m` - Sphere diameter in meters
/// * `viscosity` - Dynamic viscosity in kg/(m·s)
#[inline]
pub fn reynolds_number(density_kg_m3: f64, speed_mps: f64, diameter_m: f64, viscosity: f64) -> f64 {
    density_kg_m3 * speed_mps * diameter_m / viscosity
}
