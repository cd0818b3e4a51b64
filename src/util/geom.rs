//! Axis-aligned rectangle helpers for placement and pickup tests.

use serde::{Deserialize, Serialize};

use crate::util::vec2::Vec2;

/// Axis-aligned rectangle (origin at top-left, width/height extend positive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if a circle lies entirely inside this rectangle
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= self.x
            && center.x + radius <= self.right()
            && center.y - radius >= self.y
            && center.y + radius <= self.bottom()
    }
}

/// Clamp a point into a rectangle (the closest point on or inside it)
pub fn clamp_point_to_rect(point: Vec2, rect: &Rect) -> Vec2 {
    Vec2::new(
        point.x.clamp(rect.x, rect.right()),
        point.y.clamp(rect.y, rect.bottom()),
    )
}

/// Distance from a circle's center to the closest point of a rectangle.
/// Zero when the center is inside the rectangle. A circle of radius `r`
/// intersects the rectangle iff this distance is <= r.
pub fn circle_rect_distance(center: Vec2, rect: &Rect) -> f32 {
    center.distance_to(clamp_point_to_rect(center, rect))
}

/// Center-to-center distance of two circles
pub fn circle_circle_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance_to(b)
}
