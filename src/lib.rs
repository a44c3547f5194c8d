//! # Ballistic Trajectory
//!
//! Point-mass projectile flight through a standard atmosphere, with
//! Reynolds-number dependent sphere drag and fixed-step RK4 integration.
//!
//! Two ways to fly a projectile are provided: a batch generator that returns
//! the whole trajectory down to the launch altitude, and live projectiles
//! advanced one frame at a time for animation and hit testing.

// Re-export the main types and functions
pub use atmosphere::{simple_atmosphere, AtmosphereRatios};
pub use bounds::Rect;
pub use collision::{any_hit, any_projectile_hit};
pub use derivatives::acceleration;
pub use drag::{cd_sphere, DragRegime};
pub use error::TrajectoryError;
pub use playback::{LaunchParameters, TrajectoryPlayback};
pub use profile::PhysicalConstants;
pub use projectile::{LiveProjectile, ProjectileSet};
pub use reynolds::{air_viscosity, reynolds_number};
pub use rk4::rk4_step;
pub use target::{HarmonicWander, MotionGenerator, Target, TargetState};
pub use trajectory_point::TrajectoryPoint;
pub use trajectory_solver::{
    correct_final_position, trajectory, SolverConfig, Trajectory, TrajectorySolver,
};

// Module declarations
pub mod constants;
mod atmosphere;
mod reynolds;
mod drag;
mod error;
mod profile;
mod trajectory_point;
mod derivatives;
mod rk4;
mod trajectory_solver;
mod bounds;
mod projectile;
mod collision;
mod target;
mod playback;
