//! Orbital kinematics — pure functions from simulation time to angles.
//!
//! Simulation time and angles stay `f64` (years of simulated seconds lose
//! precision fast in `f32`); conversion to `f32` happens at the
//! render-space step in the composer.

use std::f64::consts::TAU;

use glam::{Quat, Vec3};

use crate::catalog::body::CelestialBody;

/// Angle around the parent at `sim_time` seconds, radians, unwrapped.
/// A zero orbit period means the body holds still — defined, not an error.
pub fn orbit_angle(body: &CelestialBody, sim_time: f64) -> f64 {
    if body.orbit_period_s > 0.0 {
        TAU * (sim_time / body.orbit_period_s)
    } else {
        0.0
    }
}

/// Rotation about the body's own axis at `sim_time` seconds, radians.
/// Same zero-period guard as `orbit_angle`.
pub fn rotation_angle(body: &CelestialBody, sim_time: f64) -> f64 {
    if body.rotation_period_s > 0.0 {
        TAU * (sim_time / body.rotation_period_s)
    } else {
        0.0
    }
}

/// Position on the orbital plane, `radius` out from the parent at `angle`.
/// All orbits lie in the horizontal plane — no inclination.
pub fn orbit_position(angle: f64, radius: f32) -> Vec3 {
    Vec3::new(
        radius * angle.cos() as f32,
        0.0,
        radius * angle.sin() as f32,
    )
}

/// Body spin as a quaternion about the vertical axis. The angle is wrapped
/// to one turn before the `f32` cast so large simulation times keep their
/// precision.
pub fn spin(angle: f64) -> Quat {
    Quat::from_axis_angle(Vec3::NEG_Y, angle.rem_euclid(TAU) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(orbit_period_s: f64, rotation_period_s: f64) -> CelestialBody {
        CelestialBody::new("p", 1.0e11, orbit_period_s, 1.0e6, rotation_period_s)
    }

    #[test]
    fn zero_period_never_moves() {
        let star = planet(0.0, 0.0);
        for t in [0.0, 1.0, 1.0e9, -5.0e3] {
            assert_eq!(orbit_angle(&star, t), 0.0);
            assert_eq!(rotation_angle(&star, t), 0.0);
        }
    }

    #[test]
    fn angle_is_periodic_in_the_orbit_period() {
        let p = planet(3.2e7, 8.6e4);
        for t in [0.0, 1.0e6, 7.77e8] {
            let a = orbit_angle(&p, t).rem_euclid(TAU);
            let b = orbit_angle(&p, t + p.orbit_period_s).rem_euclid(TAU);
            assert!((a - b).abs() < 1e-6, "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn quarter_orbit_is_a_right_angle() {
        let p = planet(4.0e6, 1.0e5);
        let angle = orbit_angle(&p, 1.0e6);
        assert!((angle - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let p = planet(3.2e7, 8.6e4);
        assert_eq!(orbit_angle(&p, 12_345.678), orbit_angle(&p, 12_345.678));
        assert_eq!(rotation_angle(&p, 12_345.678), rotation_angle(&p, 12_345.678));
    }

    #[test]
    fn orbit_position_convention() {
        let at_zero = orbit_position(0.0, 2.0);
        assert!((at_zero - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);

        let at_quarter = orbit_position(TAU / 4.0, 2.0);
        assert!((at_quarter - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn spin_wraps_large_angles() {
        let a = spin(0.25 * TAU);
        let b = spin(0.25 * TAU + 1_000_000.0 * TAU);
        assert!(a.angle_between(b) < 1e-3);
    }
}
