//! Math utilities and types
//!
//! Geometry used by the 2D rasterizer. Rectangles follow inclusive pixel
//! coordinates: `[x0, y0, x1, y1]` covers both corner pixels.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Construct a point from integer pixel coordinates
pub fn point(x: i32, y: i32) -> Point2 {
    Point2::new(x as f32, y as f32)
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    
    /// Width as a signed coordinate
    pub const fn w(&self) -> i32 {
        self.width as i32
    }
    
    /// Height as a signed coordinate
    pub const fn h(&self) -> i32 {
        self.height as i32
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x0: i32,
    /// Top edge
    pub y0: i32,
    /// Right edge (inclusive)
    pub x1: i32,
    /// Bottom edge (inclusive)
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from its corners, normalizing their order
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }
    
    /// Bounding box of a circle
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }
    
    /// Bounding box of a `half_w` x `half_h` box centered on a point
    pub fn centered(cx: i32, cy: i32, half_w: i32, half_h: i32) -> Self {
        Self::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }
    
    /// Number of pixel columns covered
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }
    
    /// Number of pixel rows covered
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }
    
    /// Geometric center
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }
    
    /// Whether the pixel lies inside the rectangle
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
    
    /// Shrink every edge by `amount`; `None` once the rectangle collapses
    pub fn inset(&self, amount: i32) -> Option<Self> {
        let r = Self {
            x0: self.x0 + amount,
            y0: self.y0 + amount,
            x1: self.x1 - amount,
            y1: self.y1 - amount,
        };
        (r.x0 <= r.x1 && r.y0 <= r.y1).then_some(r)
    }
}

/// Shortest distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Point2, a: Point2, b: Point2) -> f32 {
    let ab: Vec2 = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_normalizes_corners() {
        let r = Rect::new(10, 20, 0, 5);
        assert_eq!(r, Rect { x0: 0, y0: 5, x1: 10, y1: 20 });
        assert_eq!(r.width(), 11);
        assert_eq!(r.height(), 16);
    }
    
    #[test]
    fn rect_inset_collapses() {
        let r = Rect::new(0, 0, 3, 3);
        assert_eq!(r.inset(1), Some(Rect::new(1, 1, 2, 2)));
        assert_eq!(r.inset(2), None);
    }
    
    #[test]
    fn segment_distance() {
        let a = point(0, 0);
        let b = point(10, 0);
        assert_relative_eq!(distance_to_segment(point(5, 3), a, b), 3.0);
        assert_relative_eq!(distance_to_segment(point(-4, 3), a, b), 5.0);
        assert_relative_eq!(distance_to_segment(point(2, 2), a, a), 8.0_f32.sqrt());
    }
}
