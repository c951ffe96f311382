//! Serve randomness
//!
//! The engine never touches a global RNG. Serves draw from a [`ServeSource`];
//! the default path rebuilds a seeded `Pcg32` from the state's [`RngState`] so
//! that `update` stays a pure function of its inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::ServePolicy;
use crate::velocity_at_angle;

/// Supplies the two random choices a serve needs
pub trait ServeSource {
    /// `true` serves toward the right-hand player
    fn serve_right(&mut self) -> bool;
    /// Uniform sample in `[-1, 1]`, scaled by the policy's maximum angle
    fn angle_fraction(&mut self) -> f32;
}

impl ServeSource for Pcg32 {
    fn serve_right(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn angle_fraction(&mut self) -> f32 {
        self.random_range(-1.0f32..=1.0)
    }
}

/// A source that always answers the same, for exact test expectations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedServe {
    pub right: bool,
    pub fraction: f32,
}

impl ServeSource for FixedServe {
    fn serve_right(&mut self) -> bool {
        self.right
    }

    fn angle_fraction(&mut self) -> f32 {
        self.fraction.clamp(-1.0, 1.0)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Serves drawn so far; each serve gets its own stream
    pub serves: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, serves: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ self.serves.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// State after one more serve
    pub fn advanced(&self) -> Self {
        Self {
            serves: self.serves.wrapping_add(1),
            ..*self
        }
    }
}

/// Velocity for a serve under `policy`
pub fn serve_velocity(policy: ServePolicy, speed: f32, source: &mut impl ServeSource) -> Vec2 {
    match policy {
        ServePolicy::Random { max_angle } => {
            let direction = if source.serve_right() { 1.0 } else { -1.0 };
            let angle = source.angle_fraction() * max_angle;
            let vel = velocity_at_angle(speed, angle);
            Vec2::new(direction * vel.x, vel.y)
        }
        ServePolicy::Fixed { angle } => velocity_at_angle(speed, angle),
    }
}
