//! Orbit and spin math. Pure functions of elapsed time, no accumulated state,
//! so any frame can be recomputed from the clock alone.

use glam::DVec3;

/// Planet wobble around its base position.
/// `x = x0 + sin(t·ω)·A`, `z = z0 + cos(t·ω)·A`; `y` is untouched.
pub fn orbital_offset(base: DVec3, t: f64, angular_speed: f64, amplitude: f64) -> DVec3 {
    let phase = t * angular_speed;
    DVec3::new(
        base.x + phase.sin() * amplitude,
        base.y,
        base.z + phase.cos() * amplitude,
    )
}

/// Moon circling its host's base position (cos on x, sin on z).
pub fn moon_offset(host: DVec3, t: f64, angular_speed: f64, radius: f64) -> DVec3 {
    let angle = t * angular_speed;
    DVec3::new(
        host.x + angle.cos() * radius,
        host.y,
        host.z + angle.sin() * radius,
    )
}

/// Yaw for the starfield given wall-clock milliseconds.
pub fn starfield_yaw(now_ms: f64) -> f64 {
    now_ms * 0.0001 * 0.1
}

/// Camera auto-rotation. `speed` is in the conventional "orbit controls"
/// unit where 1.0 is one revolution per minute.
pub fn auto_rotate_angle(t: f64, speed: f64) -> f64 {
    t * speed * std::f64::consts::TAU / 60.0
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(a: f64) -> f64 {
    a.rem_euclid(std::f64::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn orbit_starts_at_far_z() {
        let base = DVec3::new(4.0, 2.0, -3.0);
        let p = orbital_offset(base, 0.0, 0.15, 0.5);
        assert!((p.x - 4.0).abs() < EPS);
        assert!((p.z - (-3.0 + 0.5)).abs() < EPS);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn orbit_quarter_period_shifts_x() {
        let base = DVec3::new(-8.0, 1.0, -5.0);
        let omega = 0.4;
        let p = orbital_offset(base, PI / (2.0 * omega), omega, 0.5);
        assert!((p.x - (-8.0 + 0.5)).abs() < EPS);
        assert!((p.z - (-5.0)).abs() < EPS);
    }

    #[test]
    fn orbit_is_restartable() {
        let base = DVec3::new(1.0, 0.0, 1.0);
        let a = orbital_offset(base, 123.456, 0.3, 0.5);
        let b = orbital_offset(base, 123.456, 0.3, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn moon_starts_on_x_axis() {
        let host = DVec3::new(0.0, 0.0, -3.0);
        let p = moon_offset(host, 0.0, 0.5, 1.5);
        assert!((p.x - 1.5).abs() < EPS);
        assert!((p.z + 3.0).abs() < EPS);
    }

    #[test]
    fn auto_rotate_full_turn_per_minute_at_unit_speed() {
        assert!((auto_rotate_angle(60.0, 1.0) - std::f64::consts::TAU).abs() < EPS);
        assert!((wrap_angle(-0.5) - (std::f64::consts::TAU - 0.5)).abs() < EPS);
    }
}
