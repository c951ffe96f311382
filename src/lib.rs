//! Rally Pong - a two-paddle ball game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, match state)
//! - `config`: Match configuration and reflection/serve/goal variants
//! - `autoplay`: Ball-tracking paddle controller for demos
//!
//! Drawing, keyboard wiring and frame scheduling live in the host. The host
//! owns one [`sim::MatchState`], replaces it every frame with the result of
//! [`sim::update`], and renders [`sim::MatchState::snapshot`].

pub mod autoplay;
pub mod config;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, GoalPolicy, MatchConfig, ReflectionPolicy, ServePolicy};

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    use std::f32::consts::PI;

    /// Play field dimensions
    pub const AREA_WIDTH: f32 = 500.0;
    pub const AREA_HEIGHT: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED: f32 = 300.0;
    /// Fraction of speed kept after a wall bounce (1.0 = perfectly elastic)
    pub const BALL_RESTITUTION: f32 = 1.0;
    /// Direction of the opening serve (radians from +x, y down)
    pub const INITIAL_BALL_ANGLE: f32 = PI / 8.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 5.0;
    /// Paddle height as a fraction of the field height
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.2;
    /// Distance from the side wall to the paddle center
    pub const PADDLE_INSET: f32 = 10.0;
    /// Paddle speed the host assigns while a key is held (pixels/s)
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Largest step a single tick may integrate (seconds)
    pub const MAX_DT: f32 = 1.0;

    /// Angled reflection: offset in [-0.5, 0.5] is scaled by this
    pub const PADDLE_DEFLECTION: f32 = 0.75 * PI;
    /// Random serve spread either side of horizontal
    pub const SERVE_MAX_ANGLE: f32 = PI / 4.0;
}

/// Velocity of magnitude `speed` pointing along `angle` (radians from +x)
#[inline]
pub fn velocity_at_angle(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_velocity_at_angle() {
        let v = velocity_at_angle(300.0, PI / 8.0);
        assert!((v.x - 277.164).abs() < 0.01);
        assert!((v.y - 114.805).abs() < 0.01);
        assert!((v.length() - 300.0).abs() < 0.001);
    }
}
