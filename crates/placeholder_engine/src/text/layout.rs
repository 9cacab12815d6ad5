//! Text layout and drawing
//!
//! Positions single- and multi-line text around an anchor point and blends
//! the glyph coverage onto a [`Canvas`].

use super::font::FontHandle;
use crate::canvas::Canvas;
use crate::foundation::color::Color;
use crate::foundation::math::{Point2, Rect};

/// Extra pixels between consecutive lines of multiline text
pub const LINE_SPACING: f32 = 4.0;

/// Which point of the text block sits on the anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Left edge, top of the ascenders
    TopLeft,
    /// Horizontal center, top of the ascenders
    TopCenter,
    /// Right edge, top of the ascenders
    TopRight,
    /// Left edge, vertical middle
    MiddleLeft,
    /// Center of the block
    Center,
    /// Right edge, vertical middle
    MiddleRight,
    /// Left edge, bottom of the descenders
    BottomLeft,
    /// Horizontal center, bottom of the descenders
    BottomCenter,
    /// Right edge, bottom of the descenders
    BottomRight,
}

impl Anchor {
    /// Get the normalized anchor position (0.0 to 1.0)
    pub const fn to_normalized(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleLeft => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Horizontal alignment of lines within a multiline block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Left-aligned text
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

/// A measured block of text ready to be placed
#[derive(Debug, Clone)]
pub struct TextBlock<'a> {
    lines: Vec<(&'a str, f32)>,
    width: f32,
    height: f32,
}

impl<'a> TextBlock<'a> {
    /// Measure `text` (split on `'\n'`) with a font
    pub fn measure(font: &FontHandle, text: &'a str) -> Self {
        let lines: Vec<(&str, f32)> = text.split('\n').map(|l| (l, font.measure(l))).collect();
        let width = lines.iter().map(|(_, w)| *w).fold(0.0, f32::max);
        let count = lines.len() as f32;
        let height = count * font.line_height() + (count - 1.0) * LINE_SPACING;
        Self { lines, width, height }
    }
    
    /// Widest line
    pub const fn width(&self) -> f32 {
        self.width
    }
    
    /// Total block height including line spacing
    pub const fn height(&self) -> f32 {
        self.height
    }
    
    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
    
    /// Top-left corner of the block when placed at `position`
    pub fn origin(&self, position: Point2, anchor: Anchor) -> Point2 {
        let (nx, ny) = anchor.to_normalized();
        Point2::new(position.x - nx * self.width, position.y - ny * self.height)
    }
}

/// Draw text anchored at `position`, returning the bounds of the inked pixels
///
/// Returns `None` when nothing was inked (empty or all-blank text).
pub fn draw_text(
    canvas: &mut Canvas,
    font: &FontHandle,
    position: Point2,
    text: &str,
    color: Color,
    anchor: Anchor,
    align: HorizontalAlign,
) -> Option<Rect> {
    let block = TextBlock::measure(font, text);
    let origin = block.origin(position, anchor);
    let ascent = font.ascent();
    let step = font.line_height() + LINE_SPACING;
    
    let mut inked: Option<Rect> = None;
    for (index, (line, line_width)) in block.lines.iter().enumerate() {
        let offset = match align {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => (block.width - line_width) / 2.0,
            HorizontalAlign::Right => block.width - line_width,
        };
        let baseline = (origin.y + ascent + index as f32 * step).round() as i32;
        let mut pen = origin.x + offset;
        
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            let glyph = font.rasterize(ch);
            let gx = pen.round() as i32 + glyph.left;
            let gy = baseline + glyph.top;
            
            for (row, coverage_row) in glyph.coverage.chunks(glyph.width.max(1)).enumerate() {
                for (col, &coverage) in coverage_row.iter().enumerate() {
                    if coverage == 0 {
                        continue;
                    }
                    let (x, y) = (gx + col as i32, gy + row as i32);
                    canvas.blend_pixel(x, y, color, coverage);
                    inked = Some(match inked {
                        None => Rect::new(x, y, x, y),
                        Some(r) => Rect::new(r.x0.min(x), r.y0.min(y), r.x1.max(x), r.y1.max(y)),
                    });
                }
            }
            pen += font.advance(ch, chars.peek().copied());
        }
    }
    inked
}
