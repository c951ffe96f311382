//! Play field geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Inclusive scalar interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f32,
    pub upper: f32,
}

impl Bounds {
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn mid(&self) -> f32 {
        (self.lower + self.upper) / 2.0
    }
}

/// Rectangular play field with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn x_bounds(&self) -> Bounds {
        Bounds::new(0.0, self.width)
    }

    #[inline]
    pub fn y_bounds(&self) -> Bounds {
        Bounds::new(0.0, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_mid() {
        assert_eq!(Bounds::new(0.0, 500.0).mid(), 250.0);
        assert_eq!(Bounds::new(40.0, 460.0).mid(), 250.0);
    }

    #[test]
    fn test_area_center() {
        let area = Area::new(800.0, 480.0);
        assert_eq!(area.center(), Vec2::new(400.0, 240.0));
        assert_eq!(area.y_bounds(), Bounds::new(0.0, 480.0));
    }
}
