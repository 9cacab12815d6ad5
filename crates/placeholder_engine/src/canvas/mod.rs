//! In-memory raster canvas
//!
//! A [`Canvas`] is an RGB buffer owned by a single render call. Drawing
//! operations clip silently at the edges, so layouts may overhang.

mod primitives;

pub use primitives::gradient_level;

use image::RgbImage;

use crate::foundation::color::{blend, Color};
use crate::foundation::math::Size;

/// Mutable RGB raster buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a background color
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, background),
        }
    }
    
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }
    
    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
    
    /// Canvas dimensions
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
    
    /// Read a pixel; `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y).then(|| *self.image.get_pixel(x as u32, y as u32))
    }
    
    /// Overwrite a pixel, ignoring coordinates outside the canvas
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
    
    /// Blend a color into a pixel using 8-bit coverage
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || !self.in_bounds(x, y) {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = blend(*dst, color, coverage);
    }
    
    /// Fill the inclusive span `x0..=x1` of row `y`
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width() as i32 - 1);
        for x in start..=end {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
    
    /// Fill an entire row with one color
    pub fn fill_row(&mut self, y: u32, color: Color) {
        if y < self.height() {
            self.fill_span(y as i32, 0, self.width() as i32 - 1, color);
        }
    }
    
    /// Count pixels that differ from `color`
    pub fn count_pixels_not(&self, color: Color) -> usize {
        self.image.pixels().filter(|p| **p != color).count()
    }
    
    /// Borrow the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
    
    /// Consume the canvas, returning the image buffer
    pub fn into_image(self) -> RgbImage {
        self.image
    }
    
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}
