//! Simplified standard atmosphere for the lower atmosphere.
//!
//! Two regimes are modelled: a troposphere with a linear temperature lapse
//! and a power-law pressure relation, and an isothermal stratosphere with an
//! exponential pressure decay anchored at the tropopause. Results are
//! accurate to about 20 km; above that they are only approximate and no
//! error is raised.

use crate::constants::{
    EARTH_RADIUS_KM, GMR, LAPSE_RATE_K_PER_KM, SEA_LEVEL_TEMPERATURE_K,
    TROPOPAUSE_ALTITUDE_KM, TROPOPAUSE_PRESSURE_RATIO, TROPOPAUSE_TEMPERATURE_K,
};

/// Atmospheric state relative to sea-level standard values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereRatios {
    /// density / sea-level standard density
    pub density: f64,
    /// pressure / sea-level standard pressure
    pub pressure: f64,
    /// temperature / sea-level standard temperature
    pub temperature: f64,
}

/// Convert geometric altitude to geopotential altitude (both in km).
#[inline]
pub fn geopotential_altitude(altitude_km: f64) -> f64 {
    altitude_km * EARTH_RADIUS_KM / (altitude_km + EARTH_RADIUS_KM)
}

/// Calculate the atmosphere ratios at a geometric altitude.
///
/// # Arguments
/// * `altitude_km` - Geometric altitude in kilometers (negative values are below sea level)
///
/// # Returns
/// Density, pressure and temperature ratios relative to sea level
pub fn simple_atmosphere(altitude_km: f64) -> AtmosphereRatios {
    let h = geopotential_altitude(altitude_km);

    let (temperature, pressure) = if h < TROPOPAUSE_ALTITUDE_KM {
        // Troposphere
        let theta = 1.0 + (LAPSE_RATE_K_PER_KM / SEA_LEVEL_TEMPERATURE_K) * h;
        (theta, theta.powf(GMR / -LAPSE_RATE_K_PER_KM))
    } else {
        // Stratosphere
        let theta = TROPOPAUSE_TEMPERATURE_K / SEA_LEVEL_TEMPERATURE_K;
        let delta = TROPOPAUSE_PRESSURE_RATIO
            * (-GMR * (h - TROPOPAUSE_ALTITUDE_KM) / TROPOPAUSE_TEMPERATURE_K).exp();
        (theta, delta)
    };

    AtmosphereRatios {
        density: pressure / temperature,
        pressure,
        temperature,
    }
}
