// Error type for trajectory operations
use std::error::Error;
use std::fmt;

/// Failures surfaced by the trajectory API.
///
/// The acceleration function and the RK4 step are unchecked; these errors
/// come from input validation and from the batch generator's loop guards.
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// Time step is not finite or not strictly positive
    InvalidTimeStep(f64),
    /// Launch speed magnitude is exactly zero
    ZeroLaunchSpeed,
    /// A launch input is NaN or infinite
    NonFiniteInput { name: &'static str, value: f64 },
    /// The projectile never returned to the starting altitude
    Unresolved { steps: usize, last_altitude_m: f64 },
    /// The integrator produced a NaN or infinite state
    NonFiniteState { step: usize },
    /// A projectile profile could not be loaded
    Profile(String),
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrajectoryError::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and positive, got {}", dt)
            }
            TrajectoryError::ZeroLaunchSpeed => {
                write!(f, "launch speed must be nonzero")
            }
            TrajectoryError::NonFiniteInput { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            TrajectoryError::Unresolved { steps, last_altitude_m } => write!(
                f,
                "trajectory did not resolve after {} steps (last altitude {:.3} m)",
                steps, last_altitude_m
            ),
            TrajectoryError::NonFiniteState { step } => {
                write!(f, "integration produced a non-finite state at step {}", step)
            }
            TrajectoryError::Profile(msg) => write!(f, "invalid projectile profile: {}", msg),
        }
    }
}

impl Error for TrajectoryError {}

impl From<serde_json::Error> for TrajectoryError {
    fn from(err: serde_json::Error) -> Self {
        TrajectoryError::Profile(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TrajectoryError::Unresolved { steps: 10, last_altitude_m: 12.5 };
        assert_eq!(
            err.to_string(),
            "trajectory did not resolve after 10 steps (last altitude 12.500 m)"
        );
        assert_eq!(
            TrajectoryError::ZeroLaunchSpeed.to_string(),
            "launch speed must be nonzero"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: TrajectoryError = serde_json::from_str::<f64>("nope").unwrap_err().into();
        assert!(matches!(err, TrajectoryError::Profile(_)));
    }
}
