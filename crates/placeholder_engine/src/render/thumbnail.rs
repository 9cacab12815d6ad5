//! Repair thumbnail renderer
//!
//! A light gray gradient card with a border and the repair number and
//! category centered over a soft drop shadow.

use serde::{Deserialize, Serialize};

use super::commands::{DrawBatch, DrawCommand};
use crate::canvas::Canvas;
use crate::foundation::color::{palette, Color};
use crate::foundation::math::{Point2, Rect, Size};
use crate::text::{Anchor, FontResolver, FontRole, FontSet, HorizontalAlign};

/// Default thumbnail canvas size
pub const THUMBNAIL_SIZE: Size = Size::new(800, 600);

/// Gray level of the top row
pub const GRADIENT_TOP: u8 = 240;
/// How much darker the bottom row gets
pub const GRADIENT_DROP: u8 = 20;

const DISPLAY_PX: f32 = 48.0;
/// Display size when only the bitmap face is available
const BUILTIN_DISPLAY_PX: f32 = 24.0;
const BORDER_WIDTH: i32 = 4;
const SHADOW_OFFSET: f32 = 2.0;

/// One repair thumbnail to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSpec {
    /// Repair number shown on the first line
    pub repair_id: String,
    /// Category shown on the second line
    pub category: String,
    /// Canvas size
    #[serde(default = "default_thumbnail_size")]
    pub size: Size,
}

const fn default_thumbnail_size() -> Size {
    THUMBNAIL_SIZE
}

impl ThumbnailSpec {
    /// Create a spec at the default size
    pub fn new(repair_id: &str, category: &str) -> Self {
        Self {
            repair_id: repair_id.to_string(),
            category: category.to_string(),
            size: THUMBNAIL_SIZE,
        }
    }
    
    /// Output file name, `repair-<id>.jpg`
    pub fn file_name(&self) -> String {
        format!("repair-{}.jpg", self.repair_id)
    }
}

/// Two-line caption drawn on the thumbnail
pub fn caption(repair_id: &str, category: &str) -> String {
    format!("Repair {repair_id}\n{category}")
}

/// Lays out and rasterizes repair thumbnails
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailRenderer<'a> {
    resolver: &'a FontResolver,
}

impl<'a> ThumbnailRenderer<'a> {
    /// Create a renderer that resolves fonts through `resolver`
    pub const fn new(resolver: &'a FontResolver) -> Self {
        Self { resolver }
    }
    
    /// Resolve the display font for one render call
    pub fn fonts(&self) -> FontSet {
        let face = self.resolver.resolve_face();
        let px = if face.is_builtin() { BUILTIN_DISPLAY_PX } else { DISPLAY_PX };
        FontSet::new().with(FontRole::Display, face.at(px))
    }
    
    /// Render a spec
    pub fn render_spec(&self, spec: &ThumbnailSpec) -> Canvas {
        self.render(&spec.repair_id, &spec.category, spec.size)
    }
    
    /// Render one thumbnail
    pub fn render(&self, repair_id: &str, category: &str, size: Size) -> Canvas {
        log::debug!("Rendering thumbnail for repair {} at {}x{}", repair_id, size.width, size.height);
        let batch = layout(repair_id, category, size);
        let mut canvas = Canvas::new(size, palette::WHITE);
        batch.execute(&mut canvas, &self.fonts());
        canvas
    }
}

fn centered_text(position: Point2, text: &str, color: Color) -> DrawCommand {
    DrawCommand::Text {
        position,
        text: text.to_string(),
        font: FontRole::Display,
        color,
        anchor: Anchor::Center,
        align: HorizontalAlign::Center,
    }
}

/// Build the draw commands for one thumbnail
pub fn layout(repair_id: &str, category: &str, size: Size) -> DrawBatch {
    let mut batch = DrawBatch::with_capacity(4);
    batch.push(DrawCommand::VerticalGradient {
        top: GRADIENT_TOP,
        drop: GRADIENT_DROP,
    });
    batch.push(DrawCommand::StrokeRect {
        rect: Rect::new(0, 0, size.w() - 1, size.h() - 1),
        color: palette::BORDER,
        width: BORDER_WIDTH,
    });
    
    let text = caption(repair_id, category);
    let center = Point2::new(size.width as f32 / 2.0, size.height as f32 / 2.0);
    let shadow = Point2::new(center.x + SHADOW_OFFSET, center.y + SHADOW_OFFSET);
    batch.push(centered_text(shadow, &text, palette::SHADOW));
    batch.push(centered_text(center, &text, palette::INK));
    batch
}
