//! Hit detection between a target and live projectiles.

use crate::bounds::Rect;
use crate::projectile::LiveProjectile;

/// True iff any projectile rectangle intersects the target rectangle.
///
/// Only the existence of a hit is reported, not which projectile caused it.
pub fn any_hit<'a, I>(target: &Rect, projectiles: I) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    projectiles.into_iter().any(|bounds| target.intersects(bounds))
}

/// [`any_hit`] over live projectiles.
pub fn any_projectile_hit<'a, I>(target: &Rect, projectiles: I) -> bool
where
    I: IntoIterator<Item = &'a LiveProjectile>,
{
    any_hit(target, projectiles.into_iter().map(LiveProjectile::bounds))
}
