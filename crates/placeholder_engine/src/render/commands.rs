//! Draw command pattern for the 2D layouts
//!
//! Layout code never touches pixels. It records [`DrawCommand`]s into a
//! [`DrawBatch`], which is then executed in order against a [`Canvas`].
//! Keeping the two apart lets tests inspect exactly which shapes a screen
//! is made of.

use crate::canvas::Canvas;
use crate::foundation::color::Color;
use crate::foundation::math::{Point2, Rect};
use crate::text::{draw_text, Anchor, FontRole, FontSet, HorizontalAlign};

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle
    FillRect {
        /// Inclusive bounds
        rect: Rect,
        /// Fill color
        color: Color,
    },
    
    /// Rectangle outline drawn inward from the bounds
    StrokeRect {
        /// Inclusive outer bounds
        rect: Rect,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        width: i32,
    },
    
    /// Solid rectangle with circular corners
    FillRoundedRect {
        /// Inclusive bounds
        rect: Rect,
        /// Corner radius in pixels
        radius: i32,
        /// Fill color
        color: Color,
    },
    
    /// Solid ellipse inscribed in `rect`
    FillEllipse {
        /// Bounding box
        rect: Rect,
        /// Fill color
        color: Color,
    },
    
    /// Ellipse outline inscribed in `rect`
    StrokeEllipse {
        /// Bounding box
        rect: Rect,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        width: i32,
    },
    
    /// Partial ellipse outline, degrees clockwise from three o'clock
    StrokeArc {
        /// Bounding box of the full ellipse
        rect: Rect,
        /// Start angle in degrees
        start_deg: f32,
        /// End angle in degrees
        end_deg: f32,
        /// Stroke color
        color: Color,
        /// Stroke thickness in pixels
        width: i32,
    },
    
    /// Connected line segments
    Polyline {
        /// Vertices in drawing order
        points: Vec<Point2>,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        width: i32,
    },
    
    /// Anchored text in one of the resolved fonts
    Text {
        /// Anchor position on the canvas
        position: Point2,
        /// Text content, lines separated by `'\n'`
        text: String,
        /// Font the text is set in
        font: FontRole,
        /// Text color
        color: Color,
        /// Which point of the block sits on `position`
        anchor: Anchor,
        /// Line alignment within a multiline block
        align: HorizontalAlign,
    },
    
    /// Whole-canvas gray gradient darkening by `drop` from `top` downwards
    VerticalGradient {
        /// Gray level of the first row
        top: u8,
        /// Total darkening across the canvas height
        drop: u8,
    },
}

impl DrawCommand {
    /// Shorthand for left-aligned text
    pub fn text(position: Point2, text: impl Into<String>, font: FontRole, color: Color, anchor: Anchor) -> Self {
        Self::Text {
            position,
            text: text.into(),
            font,
            color,
            anchor,
            align: HorizontalAlign::Left,
        }
    }
    
    /// Text content, if this is a text command
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
    
    /// Rasterize this command onto a canvas
    pub fn execute(&self, canvas: &mut Canvas, fonts: &FontSet) {
        match self {
            Self::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
            Self::StrokeRect { rect, color, width } => canvas.stroke_rect(*rect, *color, *width),
            Self::FillRoundedRect { rect, radius, color } => canvas.fill_rounded_rect(*rect, *radius, *color),
            Self::FillEllipse { rect, color } => canvas.fill_ellipse(*rect, *color),
            Self::StrokeEllipse { rect, color, width } => canvas.stroke_ellipse(*rect, *color, *width),
            Self::StrokeArc { rect, start_deg, end_deg, color, width } => {
                canvas.stroke_arc(*rect, *start_deg, *end_deg, *color, *width);
            }
            Self::Polyline { points, color, width } => canvas.polyline(points, *color, *width),
            Self::Text { position, text, font, color, anchor, align } => {
                draw_text(canvas, fonts.get(*font), *position, text, *color, *anchor, *align);
            }
            Self::VerticalGradient { top, drop } => canvas.fill_vertical_gradient(*top, *drop),
        }
    }
}

/// Ordered list of draw commands for one image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawBatch {
    /// List of commands to execute
    pub commands: Vec<DrawCommand>,
}

impl DrawBatch {
    /// Create a new empty batch
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Create a batch with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }
    
    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
    
    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }
    
    /// Whether the batch has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    
    /// Iterate over the commands in draw order
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }
    
    /// Count commands matching a predicate
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(*c)).count()
    }
    
    /// Whether any text command draws exactly `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.commands.iter().any(|c| c.as_text() == Some(text))
    }
    
    /// Execute every command in order
    pub fn execute(&self, canvas: &mut Canvas, fonts: &FontSet) {
        log::trace!("Executing draw batch of {} commands", self.commands.len());
        for command in &self.commands {
            command.execute(canvas, fonts);
        }
    }
}

impl<'a> IntoIterator for &'a DrawBatch {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
