//! Live projectiles advanced frame by frame for real-time animation.

use log::trace;
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bounds::Rect;
use crate::constants::DEFAULT_PROJECTILE_HALF_EXTENT;
use crate::profile::PhysicalConstants;
use crate::rk4::rk4_step;
use crate::trajectory_point::TrajectoryPoint;

/// A single projectile in flight.
///
/// `advance` performs no termination check; the owner removes projectiles
/// that reach the ground (see [`ProjectileSet::remove_grounded`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveProjectile {
    point: TrajectoryPoint,
    bounds: Rect,
    constants: PhysicalConstants,
}

impl LiveProjectile {
    /// Launch from `(0, altitude)` with the default box size.
    pub fn fire(
        altitude_m: f64,
        angle_deg: f64,
        velocity_mps: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        Self::fire_with_extent(
            altitude_m,
            angle_deg,
            velocity_mps,
            constants,
            DEFAULT_PROJECTILE_HALF_EXTENT,
        )
    }

    /// Launch with a bounding box of side `2 * half_extent` centered on the launch point.
    ///
    /// `velocity_mps` must be nonzero or every later state is NaN.
    pub fn fire_with_extent(
        altitude_m: f64,
        angle_deg: f64,
        velocity_mps: f64,
        constants: &PhysicalConstants,
        half_extent: f64,
    ) -> Self {
        let point = TrajectoryPoint::launch(altitude_m, angle_deg, velocity_mps, constants);
        let bounds = Rect::centered(Point2::from(point.position), half_extent);
        Self {
            point,
            bounds,
            constants: *constants,
        }
    }

    /// Advance by one RK4 step of `dt` and move the box with the projectile.
    pub fn advance(&mut self, dt: f64) {
        let next = rk4_step(&self.point, dt, &self.constants);
        self.bounds.translate(&(next.position - self.point.position));
        self.point = next;
    }

    pub fn point(&self) -> &TrajectoryPoint {
        &self.point
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn altitude(&self) -> f64 {
        self.point.position.y
    }

    /// True once the altitude is at or below `ground_m`
    pub fn is_grounded(&self, ground_m: f64) -> bool {
        self.point.position.y <= ground_m
    }
}

/// Active projectiles sharing one simulation clock.
///
/// A dense vector; removal swaps the last entry into the freed slot, so
/// indices are not stable across [`ProjectileSet::remove_grounded`].
#[derive(Debug, Clone, Default)]
pub struct ProjectileSet {
    projectiles: Vec<LiveProjectile>,
}

impl ProjectileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, projectile: LiveProjectile) {
        self.projectiles.push(projectile);
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LiveProjectile> {
        self.projectiles.iter()
    }

    pub fn bounds(&self) -> impl Iterator<Item = &Rect> {
        self.projectiles.iter().map(LiveProjectile::bounds)
    }

    /// Advance every projectile by the same `dt`.
    #[cfg(feature = "parallel")]
    pub fn advance_all(&mut self, dt: f64) {
        self.projectiles.par_iter_mut().for_each(|p| p.advance(dt));
    }

    /// Advance every projectile by the same `dt`.
    #[cfg(not(feature = "parallel"))]
    pub fn advance_all(&mut self, dt: f64) {
        self.projectiles.iter_mut().for_each(|p| p.advance(dt));
    }

    /// Drop projectiles at or below `ground_m`. Returns how many were removed.
    pub fn remove_grounded(&mut self, ground_m: f64) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.projectiles.len() {
            if self.projectiles[i].is_grounded(ground_m) {
                let gone = self.projectiles.swap_remove(i);
                trace!(
                    "projectile landed at x={:.2} m after {:.2} s",
                    gone.point.position.x,
                    gone.point.time
                );
                removed += 1;
            } else {
                i += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}

impl<'a> IntoIterator for &'a ProjectileSet {
    type Item = &'a LiveProjectile;
    type IntoIter = std::slice::Iter<'a, LiveProjectile>;

    fn into_iter(self) -> Self::IntoIter {
        self.projectiles.iter()
    }
}
