/// Physical constants and unit conversions used throughout the engine

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.8066;

/// Standard air density at sea level (kg/m³)
pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.2250;

/// Conversion factor: feet to meters
pub const FT_TO_M: f64 = 0.3048;

/// Conversion factor: inches to meters
pub const INCHES_TO_M: f64 = FT_TO_M / 12.0;

/// Conversion factor: pounds to kilograms
pub const LBS_TO_KG: f64 = 0.45359237;

/// Conversion factor: ounces to kilograms
pub const OZ_TO_KG: f64 = LBS_TO_KG / 16.0;

/// Conversion factor: meters to kilometers
pub const M_TO_KM: f64 = 0.001;

// Standard atmosphere

/// Radius of the Earth used for the geopotential conversion (km)
pub const EARTH_RADIUS_KM: f64 = 6369.0;

/// Sea-level standard temperature (K)
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

/// Tropopause temperature (K), constant through the lower stratosphere
pub const TROPOPAUSE_TEMPERATURE_K: f64 = 216.65;

/// Tropospheric lapse rate (K/km)
pub const LAPSE_RATE_K_PER_KM: f64 = -6.5;

/// Geopotential altitude of the tropopause (km)
pub const TROPOPAUSE_ALTITUDE_KM: f64 = 11.0;

/// Hydrostatic constant g·M/R in K/km
pub const GMR: f64 = 34.163195;

/// Pressure ratio at the tropopause
pub const TROPOPAUSE_PRESSURE_RATIO: f64 = 0.2233611;

// Sutherland's law

/// Viscosity term β in N·s/(m²·√K)
pub const SUTHERLAND_BETA: f64 = 1.458e-6;

/// Sutherland's constant for air (K)
pub const SUTHERLAND_CONSTANT_K: f64 = 110.4;

// Integration

/// Time step used by the batch generator unless configured otherwise (s)
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Iteration cap for the batch generator's boundary-crossing loop
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Half of the side length of a freshly fired projectile's bounding box
pub const DEFAULT_PROJECTILE_HALF_EXTENT: f64 = 5.0;
