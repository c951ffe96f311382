//! Time step and motion integration

use glam::Vec2;

/// Advance `pos` by `vel` over `dt` seconds
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Apply a constant acceleration over `dt` seconds
#[inline]
pub fn accelerate(vel: Vec2, accel: Vec2, dt: f32) -> Vec2 {
    vel + accel * dt
}

/// Seconds elapsed between two millisecond timestamps, clamped to `[0, max_dt]`.
///
/// Clock irregularities (a timestamp earlier than the previous one, NaN or
/// infinite timestamps) produce zero rather than a backwards step. The gap is
/// compared in `f64` so very long gaps still clamp to `max_dt`.
pub fn frame_dt(previous_ms: f64, now_ms: f64, max_dt: f32) -> f32 {
    let elapsed = (now_ms - previous_ms) / 1000.0;
    if !elapsed.is_finite() || elapsed <= 0.0 {
        if elapsed < 0.0 {
            log::trace!("Clock went backwards by {:.3}s, using dt=0", -elapsed);
        }
        return 0.0;
    }
    if elapsed > f64::from(max_dt) {
        log::trace!("Frame gap {:.3}s clamped to {:.3}s", elapsed, max_dt);
        return max_dt;
    }
    elapsed as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_integrate() {
        let vel = crate::velocity_at_angle(300.0, PI / 8.0);
        let pos = integrate(Vec2::new(250.0, 250.0), vel, 1.0);
        assert!((pos.x - 527.164).abs() < 0.01);
        assert!((pos.y - 364.805).abs() < 0.01);
    }

    #[test]
    fn test_accelerate() {
        let vel = accelerate(Vec2::new(10.0, 0.0), Vec2::new(0.0, 100.0), 0.5);
        assert_eq!(vel, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_frame_dt_clamps() {
        assert!((frame_dt(1000.0, 1016.0, 1.0) - 0.016).abs() < 1e-6);
        assert_eq!(frame_dt(0.0, 5000.0, 1.0), 1.0);
        assert_eq!(frame_dt(2000.0, 1000.0, 1.0), 0.0);
        assert_eq!(frame_dt(0.0, f64::NAN, 1.0), 0.0);
        assert_eq!(frame_dt(0.0, f64::INFINITY, 1.0), 0.0);
        assert_eq!(frame_dt(500.0, 500.0, 1.0), 0.0);
    }

    #[test]
    fn test_frame_dt_huge_gap_still_clamps() {
        // Beyond f32 range once converted to seconds
        assert_eq!(frame_dt(0.0, 1e300, 1.0), 1.0);
        assert_eq!(frame_dt(-1e300, 1e300, 0.5), 0.5);
    }
}
