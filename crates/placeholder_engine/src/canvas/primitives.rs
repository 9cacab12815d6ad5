//! Shape rasterization on [`Canvas`]
//!
//! Coordinates and conventions match the classic immediate-mode 2D APIs:
//! rectangles are inclusive, outlines grow inward from the bounding box,
//! and arc angles run clockwise from three o'clock in degrees.

use super::Canvas;
use crate::foundation::color::{gray, Color};
use crate::foundation::math::{distance_to_segment, Point2, Rect};

/// Gray level of row `y` in a gradient that fades by `drop` from `top`
pub fn gradient_level(y: u32, height: u32, top: u8, drop: u8) -> u8 {
    if height == 0 {
        return top;
    }
    let t = y as f32 / height as f32;
    (f32::from(top) - t * f32::from(drop)).max(0.0) as u8
}

/// Normalized squared distance of a pixel from an ellipse center
fn ellipse_norm(x: i32, y: i32, center: Point2, rx: f32, ry: f32) -> f32 {
    let dx = (x as f32 - center.x) / rx;
    let dy = (y as f32 - center.y) / ry;
    dx * dx + dy * dy
}

impl Canvas {
    /// Fill a rectangle
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.y0..=rect.y1 {
            self.fill_span(y, rect.x0, rect.x1, color);
        }
    }
    
    /// Outline a rectangle with a border `width` pixels thick
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) {
        let width = width.max(1);
        for y in rect.y0..=rect.y1 {
            if y < rect.y0 + width || y > rect.y1 - width {
                self.fill_span(y, rect.x0, rect.x1, color);
            } else {
                self.fill_span(y, rect.x0, rect.x0 + width - 1, color);
                self.fill_span(y, rect.x1 - width + 1, rect.x1, color);
            }
        }
    }
    
    /// Fill a rectangle with circular corners
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        let radius = radius.clamp(0, rect.width().min(rect.height()) / 2);
        if radius == 0 {
            self.fill_rect(rect, color);
            return;
        }
        
        let r = radius as f32;
        for y in rect.y0..=rect.y1 {
            let corner_y = if y < rect.y0 + radius {
                Some(rect.y0 + radius)
            } else if y > rect.y1 - radius {
                Some(rect.y1 - radius)
            } else {
                None
            };
            
            match corner_y {
                None => self.fill_span(y, rect.x0, rect.x1, color),
                Some(cy) => {
                    let dy = (y - cy) as f32;
                    let dx = (r + 0.5).mul_add(r + 0.5, -(dy * dy)).max(0.0).sqrt();
                    let left = ((rect.x0 + radius) as f32 - dx).ceil() as i32;
                    let right = ((rect.x1 - radius) as f32 + dx).floor() as i32;
                    self.fill_span(y, left.max(rect.x0), right.min(rect.x1), color);
                }
            }
        }
    }
    
    /// Fill the ellipse inscribed in `rect`
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let center = rect.center();
        let rx = (rect.x1 - rect.x0) as f32 / 2.0 + 0.5;
        let ry = (rect.y1 - rect.y0) as f32 / 2.0 + 0.5;
        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                if ellipse_norm(x, y, center, rx, ry) <= 1.0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
    
    /// Outline the ellipse inscribed in `rect`
    pub fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: i32) {
        self.stroke_arc(rect, 0.0, 360.0, color, width);
    }
    
    /// Outline part of the ellipse inscribed in `rect`
    ///
    /// The sweep runs clockwise from `start_deg` to `end_deg`; a sweep of a
    /// full turn or more draws the whole ring.
    pub fn stroke_arc(&mut self, rect: Rect, start_deg: f32, end_deg: f32, color: Color, width: i32) {
        let center = rect.center();
        let width = width.max(1) as f32;
        let rx = (rect.x1 - rect.x0) as f32 / 2.0 + 0.5;
        let ry = (rect.y1 - rect.y0) as f32 / 2.0 + 0.5;
        let inner_rx = rx - width;
        let inner_ry = ry - width;
        
        let full_turn = end_deg - start_deg >= 360.0;
        let sweep = (end_deg - start_deg).rem_euclid(360.0);
        
        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                if ellipse_norm(x, y, center, rx, ry) > 1.0 {
                    continue;
                }
                if inner_rx > 0.0 && inner_ry > 0.0 && ellipse_norm(x, y, center, inner_rx, inner_ry) <= 1.0 {
                    continue;
                }
                if !full_turn {
                    let angle = (y as f32 - center.y)
                        .atan2(x as f32 - center.x)
                        .to_degrees();
                    if (angle - start_deg).rem_euclid(360.0) > sweep {
                        continue;
                    }
                }
                self.set_pixel(x, y, color);
            }
        }
    }
    
    /// Draw connected line segments with round joins
    pub fn polyline(&mut self, points: &[Point2], color: Color, width: i32) {
        let half = width.max(1) as f32 / 2.0;
        let pad = half.ceil() as i32;
        
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let x0 = a.x.min(b.x).floor() as i32 - pad;
            let x1 = a.x.max(b.x).ceil() as i32 + pad;
            let y0 = a.y.min(b.y).floor() as i32 - pad;
            let y1 = a.y.max(b.y).ceil() as i32 + pad;
            for y in y0..=y1 {
                for x in x0..=x1 {
                    if distance_to_segment(Point2::new(x as f32, y as f32), a, b) <= half {
                        self.set_pixel(x, y, color);
                    }
                }
            }
        }
    }
    
    /// Paint a vertical gray gradient, one solid fill per row
    pub fn fill_vertical_gradient(&mut self, top: u8, drop: u8) {
        let height = self.height();
        for y in 0..height {
            self.fill_row(y, gray(gradient_level(y, height, top, drop)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::{gray, rgb};
    use crate::foundation::math::{point, Size};

    const INK: Color = rgb(255, 0, 0);

    fn blank(w: u32, h: u32) -> Canvas {
        Canvas::new(Size::new(w, h), gray(0))
    }
    
    #[test]
    fn fill_rect_is_inclusive() {
        let mut canvas = blank(10, 10);
        canvas.fill_rect(Rect::new(2, 2, 4, 3), INK);
        assert_eq!(canvas.count_pixels_not(gray(0)), 3 * 2);
    }
    
    #[test]
    fn stroke_rect_leaves_interior() {
        let mut canvas = blank(20, 20);
        canvas.stroke_rect(Rect::new(0, 0, 19, 19), INK, 4);
        assert_eq!(canvas.pixel(3, 10), Some(INK));
        assert_eq!(canvas.pixel(4, 10), Some(gray(0)));
        assert_eq!(canvas.pixel(16, 16), Some(INK));
        assert_eq!(canvas.pixel(10, 10), Some(gray(0)));
        assert_eq!(canvas.count_pixels_not(gray(0)), 400 - 12 * 12);
    }
    
    #[test]
    fn rounded_rect_trims_corners() {
        let mut canvas = blank(40, 40);
        canvas.fill_rounded_rect(Rect::new(0, 0, 39, 39), 10, INK);
        assert_eq!(canvas.pixel(0, 0), Some(gray(0)));
        assert_eq!(canvas.pixel(20, 0), Some(INK));
        assert_eq!(canvas.pixel(0, 20), Some(INK));
        assert_eq!(canvas.pixel(20, 20), Some(INK));
    }
    
    #[test]
    fn ellipse_fill_and_ring() {
        let mut filled = blank(41, 41);
        filled.fill_ellipse(Rect::around(20, 20, 20), INK);
        assert_eq!(filled.pixel(20, 20), Some(INK));
        assert_eq!(filled.pixel(0, 20), Some(INK));
        assert_eq!(filled.pixel(0, 0), Some(gray(0)));
        
        let mut ring = blank(41, 41);
        ring.stroke_ellipse(Rect::around(20, 20, 20), INK, 3);
        assert_eq!(ring.pixel(20, 20), Some(gray(0)));
        assert_eq!(ring.pixel(0, 20), Some(INK));
        assert_eq!(ring.pixel(20, 40), Some(INK));
    }
    
    #[test]
    fn arc_covers_only_its_sweep() {
        let mut canvas = blank(41, 41);
        canvas.stroke_arc(Rect::around(20, 20, 20), 0.0, 240.0, INK, 3);
        // 0 deg (east) and 90 deg (south) are inside the sweep
        assert_eq!(canvas.pixel(40, 20), Some(INK));
        assert_eq!(canvas.pixel(20, 40), Some(INK));
        // 300 deg lies up and to the right, outside the sweep
        assert_eq!(canvas.pixel(30, 4), Some(gray(0)));
    }
    
    #[test]
    fn polyline_has_thickness() {
        let mut canvas = blank(30, 30);
        canvas.polyline(&[point(5, 15), point(25, 15)], INK, 5);
        assert_eq!(canvas.pixel(15, 13), Some(INK));
        assert_eq!(canvas.pixel(15, 17), Some(INK));
        assert_eq!(canvas.pixel(15, 18), Some(gray(0)));
    }
    
    #[test]
    fn gradient_rows_are_uniform_and_darken() {
        let mut canvas = blank(16, 50);
        canvas.fill_vertical_gradient(240, 20);
        assert_eq!(canvas.pixel(0, 0), Some(gray(240)));
        let mut previous = 255u8;
        for y in 0..50 {
            let level = canvas.pixel(0, y).unwrap()[0];
            assert!(level <= previous);
            for x in 0..16 {
                assert_eq!(canvas.pixel(x, y), Some(gray(level)));
            }
            previous = level;
        }
        assert_eq!(gradient_level(599, 600, 240, 20), 220);
    }
}
