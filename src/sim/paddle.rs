//! Paddles and the vertical paddle controller

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// Which player a paddle, goal or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x velocity that carries the ball away from this side's paddle
    #[inline]
    pub fn away(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A vertical paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center point; `x` never changes after creation
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical speed set by the host (pixels/s, positive is down)
    pub speed: f32,
}

impl Paddle {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
            speed: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// x of the face the ball strikes for a paddle on `side`
    #[inline]
    pub fn near_face(&self, side: Side) -> f32 {
        self.center.x + side.away() * self.width / 2.0
    }

    /// x of the face turned toward the paddle's own wall
    #[inline]
    pub fn far_face(&self, side: Side) -> f32 {
        self.center.x - side.away() * self.width / 2.0
    }

    /// Copy with a new speed; non-finite speeds stop the paddle
    pub fn with_speed(&self, speed: f32) -> Paddle {
        Paddle {
            speed: if speed.is_finite() { speed } else { 0.0 },
            ..*self
        }
    }

    /// Integrate `center.y` by `speed * dt`, keeping the paddle inside `bounds`.
    ///
    /// A paddle at least as tall as the bounds cannot fit; it is pinned at the
    /// middle of the bounds instead of being pushed between the two limits.
    pub fn advance(&self, bounds: Bounds, dt: f32) -> Paddle {
        let half = self.height / 2.0;
        let min_y = bounds.lower + half;
        let max_y = bounds.upper - half;

        // `clamp` panics on crossed or NaN limits
        let y = if min_y < max_y {
            (self.center.y + self.speed * dt).clamp(min_y, max_y)
        } else {
            bounds.mid()
        };

        Paddle {
            center: Vec2::new(self.center.x, if y.is_finite() { y } else { self.center.y }),
            ..*self
        }
    }
}
