use approx::{assert_abs_diff_eq, assert_relative_eq};
use ballistic_trajectory::{
    any_hit, any_projectile_hit, cd_sphere, correct_final_position, simple_atmosphere,
    trajectory, LiveProjectile, PhysicalConstants, Rect, SolverConfig, TrajectorySolver,
};

const EARTH_RADIUS_KM: f64 = 6369.0;

fn cannonball_solver() -> TrajectorySolver {
    TrajectorySolver::new(PhysicalConstants::cannonball(), SolverConfig::default())
}

#[test]
fn test_cannonball_regression() {
    let traj = cannonball_solver().solve(0.0, 100.0, 40.0).unwrap();

    assert_eq!(traj.len(), 128);
    assert_abs_diff_eq!(traj.apex().position.y, 197.798339457, epsilon = 1e-6);
    assert_abs_diff_eq!(traj.time_of_flight(), 12.697701298, epsilon = 1e-6);
    assert_abs_diff_eq!(traj.range(), 897.122218709, epsilon = 1e-6);
    assert_abs_diff_eq!(traj.impact_speed(), 89.098639579, epsilon = 1e-6);
}

#[test]
fn test_altitude_thins_the_air() {
    let c = PhysicalConstants::cannonball();
    let low = trajectory(0.0, 100.0, 40.0, 0.1, true, &c).unwrap();
    let high = trajectory(1609.0, 100.0, 40.0, 0.1, true, &c).unwrap();

    assert_eq!(high.len(), 129);
    assert_abs_diff_eq!(high.apex().position.y, 200.076758084, epsilon = 1e-6);
    assert_abs_diff_eq!(high.time_of_flight(), 12.771984215, epsilon = 1e-6);
    assert!(high.range() > low.range());
}

#[test]
fn test_baseball_regression() {
    let b = PhysicalConstants::baseball();
    let sea = trajectory(0.0, 35.0, 40.0, 0.1, true, &b).unwrap();
    let mile = trajectory(1609.0, 35.0, 40.0, 0.1, true, &b).unwrap();

    assert_eq!(sea.len(), 40);
    assert_abs_diff_eq!(sea.apex().position.y, 18.673064417, epsilon = 1e-6);
    assert_abs_diff_eq!(sea.time_of_flight(), 3.885145218, epsilon = 1e-6);
    assert_eq!(mile.len(), 41);
    assert_abs_diff_eq!(mile.apex().position.y, 19.379407258, epsilon = 1e-6);
    assert_abs_diff_eq!(mile.time_of_flight(), 3.960934478, epsilon = 1e-6);
}

#[test]
fn test_time_ascending_and_ends_on_boundary() {
    let b = PhysicalConstants::baseball();
    for (altitude, angle) in [(0.0, 10.0), (500.0, 45.0), (1609.0, 80.0), (3000.0, 60.0)] {
        let traj = trajectory(altitude, 35.0, angle, 0.1, false, &b).unwrap();
        for pair in traj.points().windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert_abs_diff_eq!(traj.last().position.y, altitude, epsilon = 1e-6);
        assert_eq!(traj.first().position.y, altitude);
        for point in &traj.points()[1..traj.len() - 1] {
            assert!(point.position.y > altitude);
        }
    }
}

#[test]
fn test_drag_coefficient_at_unit_reynolds() {
    assert_eq!(cd_sphere(1.0), 24.0);
}

#[test]
fn test_atmosphere_continuous_at_tropopause() {
    // Geometric altitude whose geopotential altitude is exactly 11 km
    let boundary = 11.0 * EARTH_RADIUS_KM / (EARTH_RADIUS_KM - 11.0);
    let below = simple_atmosphere(boundary - 1e-9);
    let above = simple_atmosphere(boundary + 1e-9);

    assert_abs_diff_eq!(below.density, above.density, epsilon = 1e-6);
    assert_abs_diff_eq!(below.pressure, above.pressure, epsilon = 1e-6);
    assert_abs_diff_eq!(below.temperature, above.temperature, epsilon = 1e-6);
}

#[test]
fn test_zero_drag_is_a_parabola() {
    let vacuum = PhysicalConstants::cannonball().with_sea_level_density(0.0);
    let (v0, angle) = (50.0_f64, 60.0_f64);
    let (vx, vy) = (v0 * angle.to_radians().cos(), v0 * angle.to_radians().sin());
    let g = vacuum.gravity_m_s2;

    let traj = trajectory(0.0, v0, angle, 0.1, true, &vacuum).unwrap();
    for point in &traj.points()[..traj.len() - 1] {
        let t = point.time;
        assert_abs_diff_eq!(point.position.x, vx * t, epsilon = 1e-8);
        assert_abs_diff_eq!(point.position.y, vy * t - 0.5 * g * t * t, epsilon = 1e-8);
        assert_abs_diff_eq!(point.acceleration.x, 0.0);
        assert_abs_diff_eq!(point.acceleration.y, -g);
    }
}

#[test]
fn test_boundary_correction_is_idempotent() {
    let traj = trajectory(0.0, 100.0, 40.0, 0.1, false, &PhysicalConstants::cannonball()).unwrap();
    let n = traj.len();
    let (a1, corrected) = (traj.points()[n - 2], traj.points()[n - 1]);

    let again = correct_final_position(0.0, &a1, &corrected);
    assert_relative_eq!(again.time, corrected.time, epsilon = 1e-9);
    assert_relative_eq!(again.position, corrected.position, epsilon = 1e-9);
    assert_relative_eq!(again.velocity, corrected.velocity, epsilon = 1e-9);
    assert_relative_eq!(again.acceleration, corrected.acceleration, epsilon = 1e-9);
}

#[test]
fn test_live_projectile_matches_batch() {
    let c = PhysicalConstants::cannonball();
    let traj = trajectory(0.0, 100.0, 40.0, 0.1, true, &c).unwrap();
    let mut live = LiveProjectile::fire(0.0, 40.0, 100.0, &c);

    assert_eq!(live.point(), traj.first());
    for expected in &traj.points()[1..traj.len() - 1] {
        live.advance(0.1);
        assert_eq!(live.point().time, expected.time);
        assert_eq!(live.point().position, expected.position);
        assert_eq!(live.point().velocity, expected.velocity);
    }
}

#[test]
fn test_collision_examples() {
    let target = Rect::from_corners(0.0, 0.0, 2.0, 2.0);
    assert!(any_hit(&target, &[Rect::from_corners(1.0, 1.0, 3.0, 3.0)]));

    let target = Rect::from_corners(0.0, 0.0, 1.0, 1.0);
    assert!(!any_hit(&target, &[Rect::from_corners(5.0, 5.0, 6.0, 6.0)]));
}

#[test]
fn test_projectile_hits_target_in_flight() {
    let c = PhysicalConstants::cannonball();
    let target = Rect::centered([100.0, 80.0].into(), 20.0);
    let mut shots = vec![
        LiveProjectile::fire(0.0, 40.0, 100.0, &c),
        LiveProjectile::fire(0.0, 10.0, 100.0, &c),
    ];

    let mut hit = false;
    for _ in 0..20 {
        shots.iter_mut().for_each(|p| p.advance(0.1));
        hit |= any_projectile_hit(&target, &shots);
    }
    assert!(hit);
}
