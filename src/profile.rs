//! Physical constants of a spherical projectile.
//!
//! Different projectiles are different constant sets, not different types.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::constants::{G_ACCEL_MPS2, INCHES_TO_M, OZ_TO_KG, SEA_LEVEL_DENSITY_KG_M3};
use crate::error::TrajectoryError;

/// Immutable projectile and environment constants read by the acceleration function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub diameter_m: f64,
    pub mass_kg: f64,
    /// Always 0.25·π·diameter²
    pub frontal_area_m2: f64,
    pub gravity_m_s2: f64,
    pub sea_level_density_kg_m3: f64,
}

impl PhysicalConstants {
    /// Constants for a sphere of the given size and mass under standard gravity and air
    pub fn new(diameter_m: f64, mass_kg: f64) -> Self {
        Self {
            diameter_m,
            mass_kg,
            frontal_area_m2: frontal_area(diameter_m),
            gravity_m_s2: G_ACCEL_MPS2,
            sea_level_density_kg_m3: SEA_LEVEL_DENSITY_KG_M3,
        }
    }

    pub fn with_gravity(mut self, gravity_m_s2: f64) -> Self {
        self.gravity_m_s2 = gravity_m_s2;
        self
    }

    /// Scales drag at all altitudes. Zero disables drag entirely.
    pub fn with_sea_level_density(mut self, density_kg_m3: f64) -> Self {
        self.sea_level_density_kg_m3 = density_kg_m3;
        self
    }

    /// Regulation baseball: circumference 9.125 in, weight 5.125 oz
    /// (the middle of the allowed ranges).
    pub fn baseball() -> Self {
        let diameter_m = 9.125 / PI * INCHES_TO_M;
        let mass_kg = 5.125 * OZ_TO_KG;
        Self::new(diameter_m, mass_kg)
    }

    /// British cannonball: 4.95 in diameter, 5.4 kg
    pub fn cannonball() -> Self {
        Self::new(4.95 * INCHES_TO_M, 5.4)
    }

    /// Load constants from a JSON profile.
    ///
    /// Required keys are `diameter_m` and `mass_kg`; `gravity_m_s2` and
    /// `sea_level_density_kg_m3` fall back to the standard values.
    pub fn from_json_str(json: &str) -> Result<Self, TrajectoryError> {
        let fields: ProfileFields = serde_json::from_str(json)?;
        fields.validate()?;
        Ok(Self::new(fields.diameter_m, fields.mass_kg)
            .with_gravity(fields.gravity_m_s2)
            .with_sea_level_density(fields.sea_level_density_kg_m3))
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cannonball()
    }
}

/// Frontal (reference) area of a sphere in m²
#[inline]
pub fn frontal_area(diameter_m: f64) -> f64 {
    0.25 * PI * diameter_m * diameter_m
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFields {
    diameter_m: f64,
    mass_kg: f64,
    #[serde(default = "default_gravity")]
    gravity_m_s2: f64,
    #[serde(default = "default_density")]
    sea_level_density_kg_m3: f64,
}

fn default_gravity() -> f64 {
    G_ACCEL_MPS2
}

fn default_density() -> f64 {
    SEA_LEVEL_DENSITY_KG_M3
}

impl ProfileFields {
    fn validate(&self) -> Result<(), TrajectoryError> {
        if !(self.diameter_m.is_finite() && self.diameter_m > 0.0) {
            return Err(TrajectoryError::Profile(format!(
                "diameter_m must be positive, got {}",
                self.diameter_m
            )));
        }
        if !(self.mass_kg.is_finite() && self.mass_kg > 0.0) {
            return Err(TrajectoryError::Profile(format!(
                "mass_kg must be positive, got {}",
                self.mass_kg
            )));
        }
        if !self.gravity_m_s2.is_finite() {
            return Err(TrajectoryError::Profile("gravity_m_s2 must be finite".to_string()));
        }
        if !(self.sea_level_density_kg_m3.is_finite() && self.sea_level_density_kg_m3 >= 0.0) {
            return Err(TrajectoryError::Profile(
                "sea_level_density_kg_m3 must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
