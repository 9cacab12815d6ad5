//! Mobile form mockup renderer
//!
//! Draws a phone-sized screen of the repair request flow: a status bar,
//! then either the report form, a loading spinner, or a success screen.
//! Which optional form sections appear is decided by [`ScreenKind`], never
//! by comparing titles inside the layout code.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::commands::{DrawBatch, DrawCommand};
use crate::canvas::Canvas;
use crate::foundation::color::{palette, Color};
use crate::foundation::math::{point, Point2, Rect, Size};
use crate::text::{Anchor, FontResolver, FontRole, FontSet, HorizontalAlign};

/// Default mockup canvas size
pub const SCREEN_SIZE: Size = Size::new(400, 800);

const TITLE_PX: f32 = 28.0;
const BODY_PX: f32 = 16.0;
const ICON_PX: f32 = 36.0;

const STATUS_BAR_HEIGHT: i32 = 30;
const SPINNER_RADIUS: i32 = 40;
const FORM_FIELDS: [&str; 3] = ["Vehicle ID", "Issue Type", "Description"];

/// Screen layout selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenVariant {
    /// The report form
    #[default]
    Normal,
    /// Spinner while the form loads
    Loading,
    /// Success screen after submission
    Confirmation,
}

impl ScreenVariant {
    /// Lowercase name used in manifests
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Loading => "loading",
            Self::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for ScreenVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown screen variant name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen variant '{0}' (expected normal, loading or confirmation)")]
pub struct ParseVariantError(pub String);

impl FromStr for ScreenVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "loading" => Ok(Self::Loading),
            "confirmation" => Ok(Self::Confirmation),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

bitflags! {
    /// Optional sections of the report form
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayoutBlocks: u8 {
        /// Photo upload area below the fields
        const PHOTO_UPLOAD = 1 << 0;
        /// English/Spanish toggle below the fields
        const LANGUAGE_TOGGLE = 1 << 1;
        /// Issue Type field shows a dropdown prompt
        const ISSUE_TYPE_DROPDOWN = 1 << 2;
        /// Description field shows a generic hint
        const PLAIN_DESCRIPTION_HINT = 1 << 3;
    }
}

/// Which screen of the flow a mockup depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Form with the language toggle
    MultilingualSupport,
    /// Form with the photo upload area
    PhotoDocumentation,
    /// Any other screen
    Generic,
}

impl ScreenKind {
    /// Identify the screen from its display title
    pub fn from_title(title: &str) -> Self {
        match title {
            "Multilingual Support" => Self::MultilingualSupport,
            "Photo Documentation" => Self::PhotoDocumentation,
            _ => Self::Generic,
        }
    }
    
    /// Optional form sections this screen shows
    pub const fn blocks(self) -> LayoutBlocks {
        match self {
            Self::MultilingualSupport => LayoutBlocks::LANGUAGE_TOGGLE.union(LayoutBlocks::ISSUE_TYPE_DROPDOWN),
            Self::PhotoDocumentation => LayoutBlocks::PHOTO_UPLOAD.union(LayoutBlocks::PLAIN_DESCRIPTION_HINT),
            Self::Generic => LayoutBlocks::empty(),
        }
    }
}

/// One mockup to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupSpec {
    /// Output file name; the extension picks the encoding
    pub file_name: String,
    /// Screen title
    pub title: String,
    /// Caption shown on loading and confirmation screens
    pub description: String,
    /// Layout selector
    #[serde(default)]
    pub variant: ScreenVariant,
    /// Canvas size
    #[serde(default = "default_screen_size")]
    pub size: Size,
}

const fn default_screen_size() -> Size {
    SCREEN_SIZE
}

impl MockupSpec {
    /// Create a spec at the default screen size
    pub fn new(file_name: &str, title: &str, description: &str, variant: ScreenVariant) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            variant,
            size: SCREEN_SIZE,
        }
    }
}

/// Lays out and rasterizes mobile mockups
#[derive(Debug, Clone, Copy)]
pub struct MockupRenderer<'a> {
    resolver: &'a FontResolver,
}

impl<'a> MockupRenderer<'a> {
    /// Create a renderer that resolves fonts through `resolver`
    pub const fn new(resolver: &'a FontResolver) -> Self {
        Self { resolver }
    }
    
    /// Resolve the title, body and icon fonts for one render call
    pub fn fonts(&self) -> FontSet {
        let face = self.resolver.resolve_face();
        let title = face.at(TITLE_PX);
        let icon = self.resolver.resolve_primary(ICON_PX).unwrap_or_else(|| title.clone());
        FontSet::new()
            .with(FontRole::Title, title)
            .with(FontRole::Body, face.at(BODY_PX))
            .with(FontRole::Icon, icon)
    }
    
    /// Render a spec
    pub fn render_spec(&self, spec: &MockupSpec) -> Canvas {
        self.render(&spec.title, &spec.description, spec.variant, spec.size)
    }
    
    /// Render one screen
    pub fn render(&self, title: &str, description: &str, variant: ScreenVariant, size: Size) -> Canvas {
        log::debug!("Rendering {} mockup '{}' at {}x{}", variant, title, size.width, size.height);
        let batch = layout(title, description, variant, size);
        let mut canvas = Canvas::new(size, palette::SCREEN_BACKGROUND);
        batch.execute(&mut canvas, &self.fonts());
        canvas
    }
}

/// Build the draw commands for one screen
pub fn layout(title: &str, description: &str, variant: ScreenVariant, size: Size) -> DrawBatch {
    let mut batch = DrawBatch::with_capacity(32);
    status_bar(&mut batch, size);
    match variant {
        ScreenVariant::Loading => loading_screen(&mut batch, description, size),
        ScreenVariant::Confirmation => confirmation_screen(&mut batch, description, size),
        ScreenVariant::Normal => form_screen(&mut batch, title, ScreenKind::from_title(title).blocks(), size),
    }
    batch
}

fn status_bar(batch: &mut DrawBatch, size: Size) {
    let w = size.w();
    batch.push(DrawCommand::FillRect {
        rect: Rect::new(0, 0, w, STATUS_BAR_HEIGHT),
        color: palette::BAR,
    });
    batch.push(DrawCommand::text(point(20, 8), "10:30", FontRole::Body, palette::WHITE, Anchor::TopLeft));
    
    // battery body and tip
    batch.push(DrawCommand::StrokeRect {
        rect: Rect::new(w - 50, 8, w - 15, 22),
        color: palette::WHITE,
        width: 1,
    });
    batch.push(DrawCommand::FillRect {
        rect: Rect::new(w - 15, 12, w - 10, 18),
        color: palette::WHITE,
    });
}

/// Center of the spinner / success badge
fn badge_center(size: Size) -> (i32, i32) {
    (size.w() / 2, size.h() / 2 - 40)
}

fn centered_captions(batch: &mut DrawBatch, heading: &str, description: &str, size: Size) {
    let cx = size.w() / 2;
    let cy = size.h() / 2;
    batch.push(DrawCommand::text(point(cx, cy + 40), heading, FontRole::Title, palette::WHITE, Anchor::Center));
    batch.push(DrawCommand::Text {
        position: point(cx, cy + 80),
        text: description.to_string(),
        font: FontRole::Body,
        color: palette::LABEL,
        anchor: Anchor::Center,
        align: HorizontalAlign::Center,
    });
}

fn loading_screen(batch: &mut DrawBatch, description: &str, size: Size) {
    let (cx, cy) = badge_center(size);
    let bounds = Rect::around(cx, cy, SPINNER_RADIUS);
    batch.push(DrawCommand::StrokeEllipse {
        rect: bounds,
        color: palette::ACCENT,
        width: 3,
    });
    batch.push(DrawCommand::StrokeArc {
        rect: bounds,
        start_deg: 0.0,
        end_deg: 240.0,
        color: palette::ACCENT,
        width: 3,
    });
    centered_captions(batch, "Loading...", description, size);
}

fn confirmation_screen(batch: &mut DrawBatch, description: &str, size: Size) {
    let (cx, cy) = badge_center(size);
    batch.push(DrawCommand::FillEllipse {
        rect: Rect::around(cx, cy, SPINNER_RADIUS),
        color: palette::SUCCESS,
    });
    batch.push(DrawCommand::Polyline {
        points: checkmark_points(size).to_vec(),
        color: palette::WHITE,
        width: 5,
    });
    centered_captions(batch, "Success!", description, size);
    
    let button_y = size.h() / 2 + 150;
    let mid = size.w() / 2;
    batch.push(DrawCommand::FillRoundedRect {
        rect: Rect::new(mid - 80, button_y, mid + 80, button_y + 40),
        radius: 5,
        color: palette::ACCENT,
    });
    batch.push(DrawCommand::text(point(mid, button_y + 20), "Close", FontRole::Body, palette::WHITE, Anchor::Center));
}

fn field_placeholder(field: &str, blocks: LayoutBlocks) -> (String, Color) {
    match field {
        "Issue Type" if blocks.contains(LayoutBlocks::ISSUE_TYPE_DROPDOWN) => {
            ("Select Issue Type ▼".to_string(), palette::WHITE)
        }
        "Description" if blocks.contains(LayoutBlocks::PLAIN_DESCRIPTION_HINT) => {
            ("Enter description...".to_string(), palette::MUTED)
        }
        _ => (format!("Enter {}...", field.to_lowercase()), palette::MUTED),
    }
}

fn form_screen(batch: &mut DrawBatch, title: &str, blocks: LayoutBlocks, size: Size) {
    let w = size.w();
    
    // header
    batch.push(DrawCommand::FillRect {
        rect: Rect::new(0, 30, w, 90),
        color: palette::BAR,
    });
    batch.push(DrawCommand::text(point(20, 60), title, FontRole::Title, palette::WHITE, Anchor::MiddleLeft));
    batch.push(DrawCommand::text(point(w - 20, 60), "×", FontRole::Icon, palette::WHITE, Anchor::MiddleRight));
    
    let mut y = 120;
    batch.push(DrawCommand::text(point(20, y), "Report Vehicle Issue", FontRole::Title, palette::WHITE, Anchor::TopLeft));
    y += 50;
    
    for field in FORM_FIELDS {
        batch.push(DrawCommand::text(point(20, y), field, FontRole::Body, palette::LABEL, Anchor::TopLeft));
        y += 30;
        batch.push(DrawCommand::FillRoundedRect {
            rect: Rect::new(20, y, w - 20, y + 40),
            radius: 5,
            color: palette::FIELD,
        });
        let (hint, color) = field_placeholder(field, blocks);
        batch.push(DrawCommand::text(point(30, y + 20), hint, FontRole::Body, color, Anchor::MiddleLeft));
        y += 60;
    }
    
    if blocks.contains(LayoutBlocks::PHOTO_UPLOAD) {
        y = photo_upload_block(batch, y, size);
    }
    if blocks.contains(LayoutBlocks::LANGUAGE_TOGGLE) {
        language_toggle_block(batch, y, size);
    }
    
    let button_y = size.h() - 80;
    batch.push(DrawCommand::FillRoundedRect {
        rect: Rect::new(20, button_y, w - 20, button_y + 50),
        radius: 5,
        color: palette::ACCENT,
    });
    batch.push(DrawCommand::text(point(w / 2, button_y + 25), "Submit", FontRole::Title, palette::WHITE, Anchor::Center));
}

/// Returns the y offset below the block
fn photo_upload_block(batch: &mut DrawBatch, mut y: i32, size: Size) -> i32 {
    let w = size.w();
    batch.push(DrawCommand::text(point(20, y), "Upload Photos", FontRole::Body, palette::LABEL, Anchor::TopLeft));
    y += 30;
    
    batch.push(DrawCommand::FillRoundedRect {
        rect: Rect::new(20, y, w - 20, y + 120),
        radius: 5,
        color: palette::FIELD,
    });
    
    // camera body and lens
    let (cx, cy) = (w / 2, y + 60);
    batch.push(DrawCommand::StrokeRect {
        rect: Rect::centered(cx, cy, 20, 15),
        color: palette::MUTED,
        width: 2,
    });
    batch.push(DrawCommand::StrokeEllipse {
        rect: Rect::around(cx, cy, 8),
        color: palette::MUTED,
        width: 2,
    });
    batch.push(DrawCommand::text(point(w / 2, y + 90), "Tap to add photos", FontRole::Body, palette::MUTED, Anchor::Center));
    
    y + 140
}

fn language_toggle_block(batch: &mut DrawBatch, y: i32, size: Size) {
    let w = size.w();
    let inner = w - 20;
    batch.push(DrawCommand::FillRoundedRect {
        rect: Rect::new(20, y, inner, y + 40),
        radius: 20,
        color: palette::FIELD,
    });
    
    // English is the selected side
    batch.push(DrawCommand::FillRoundedRect {
        rect: Rect::new(25, y + 5, inner / 2 - 5, y + 35),
        radius: 15,
        color: palette::ACCENT,
    });
    let label_y = y + 20;
    batch.push(DrawCommand::text(point(inner / 4 + 20, label_y), "English", FontRole::Body, palette::WHITE, Anchor::Center));
    batch.push(DrawCommand::text(point(inner / 4 * 3 + 20, label_y), "Español", FontRole::Body, palette::MUTED, Anchor::Center));
}

/// Anchor points of the confirmation checkmark
pub fn checkmark_points(size: Size) -> [Point2; 3] {
    let (cx, cy) = badge_center(size);
    [point(cx - 20, cy), point(cx - 5, cy + 15), point(cx + 20, cy - 15)]
}
