//! Font faces and sized font handles
//!
//! A [`FontFace`] is either a TrueType/OpenType face rasterized with
//! `fontdue` or the built-in bitmap face. A [`FontHandle`] pins a face to a
//! pixel size and answers the metric queries the text layout needs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use super::builtin;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading a font candidate
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// No file matched the candidate name
    #[error("Font not found: {0}")]
    NotFound(String),
    
    /// The file exists but could not be read
    #[error("Failed to read font {path:?}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
    
    /// The file could not be parsed as a font
    #[error("Failed to load font {path:?}: {reason}")]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Parser message
        reason: String,
    },
}

/// A loaded glyph source, independent of size
#[derive(Clone)]
pub enum FontFace {
    /// Outline font rasterized by `fontdue`
    Vector {
        /// Parsed font
        font: Arc<Font>,
        /// File the face was loaded from
        source: PathBuf,
    },
    /// Built-in 5x7 bitmap font
    Builtin,
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector { source, .. } => f.debug_struct("Vector").field("source", source).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontFace {
    /// Parse a face from raw TTF/OTF/TTC bytes (first face of a collection)
    pub fn from_bytes(bytes: Vec<u8>, source: &Path) -> FontResult<Self> {
        let settings = FontSettings {
            collection_index: 0,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|e| FontError::Parse {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::Vector {
            font: Arc::new(font),
            source: source.to_path_buf(),
        })
    }
    
    /// Load a face from a font file
    pub fn from_file(path: &Path) -> FontResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, path)
    }
    
    /// Whether this is the built-in bitmap face
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
    
    /// Pin the face to a pixel size
    pub fn at(&self, px: f32) -> FontHandle {
        FontHandle {
            face: self.clone(),
            px,
        }
    }
}

/// A rasterized glyph positioned relative to the pen on the baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Horizontal offset of the bitmap from the pen
    pub left: i32,
    /// Vertical offset of the bitmap's top row from the baseline
    pub top: i32,
    /// Bitmap width
    pub width: usize,
    /// Bitmap height
    pub height: usize,
    /// Row-major 8-bit coverage
    pub coverage: Vec<u8>,
}

/// A face at a specific pixel size
#[derive(Debug, Clone)]
pub struct FontHandle {
    face: FontFace,
    px: f32,
}

impl FontHandle {
    /// The built-in bitmap font at a pixel size
    pub fn builtin(px: f32) -> Self {
        FontFace::Builtin.at(px)
    }
    
    /// Requested pixel size
    pub const fn px(&self) -> f32 {
        self.px
    }
    
    /// Underlying face
    pub const fn face(&self) -> &FontFace {
        &self.face
    }
    
    /// Whether this handle renders with the built-in bitmap font
    pub const fn is_builtin(&self) -> bool {
        self.face.is_builtin()
    }
    
    /// Distance from the baseline to the top of the tallest glyphs
    pub fn ascent(&self) -> f32 {
        match &self.face {
            FontFace::Vector { font, .. } => font
                .horizontal_line_metrics(self.px)
                .map_or(self.px * 0.8, |m| m.ascent),
            FontFace::Builtin => builtin::ascent(self.px),
        }
    }
    
    /// Distance from the baseline to the bottom of descenders (positive)
    pub fn descent(&self) -> f32 {
        match &self.face {
            FontFace::Vector { font, .. } => font
                .horizontal_line_metrics(self.px)
                .map_or(self.px * 0.2, |m| -m.descent),
            FontFace::Builtin => builtin::descent(self.px),
        }
    }
    
    /// Height of one line of text without extra spacing
    pub fn line_height(&self) -> f32 {
        self.ascent() + self.descent()
    }
    
    /// Horizontal pen advance for a character, including kerning to `next`
    pub fn advance(&self, ch: char, next: Option<char>) -> f32 {
        match &self.face {
            FontFace::Vector { font, .. } => {
                let kern = next
                    .and_then(|n| font.horizontal_kern(ch, n, self.px))
                    .unwrap_or(0.0);
                font.metrics(ch, self.px).advance_width + kern
            }
            FontFace::Builtin => builtin::advance(self.px),
        }
    }
    
    /// Width of a single line of text
    pub fn measure(&self, line: &str) -> f32 {
        let mut chars = line.chars().peekable();
        let mut width = 0.0;
        while let Some(ch) = chars.next() {
            width += self.advance(ch, chars.peek().copied());
        }
        width
    }
    
    /// Rasterize a single character
    pub fn rasterize(&self, ch: char) -> GlyphBitmap {
        match &self.face {
            FontFace::Vector { font, .. } => {
                let (metrics, coverage) = font.rasterize(ch, self.px);
                GlyphBitmap {
                    left: metrics.xmin,
                    top: -(metrics.ymin + metrics.height as i32),
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            }
            FontFace::Builtin => builtin::rasterize(ch, self.px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = FontFace::from_bytes(vec![0u8; 16], Path::new("junk.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }
    
    #[test]
    fn missing_file_is_io_error() {
        let err = FontFace::from_file(Path::new("/definitely/not/here.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
    }
    
    /// Repackage a single-face font as a one-entry TrueType collection
    fn wrap_in_collection(font: &[u8]) -> Vec<u8> {
        const HEADER: u32 = 12;
        let mut out = Vec::with_capacity(font.len() + HEADER as usize);
        out.extend_from_slice(b"ttcf");
        out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        out.extend_from_slice(&1u32.to_be_bytes());
        out.extend_from_slice(&HEADER.to_be_bytes());
        
        let mut body = font.to_vec();
        let num_tables = u16::from_be_bytes([body[4], body[5]]) as usize;
        for table in 0..num_tables {
            let at = 12 + table * 16 + 8;
            let offset = u32::from_be_bytes([body[at], body[at + 1], body[at + 2], body[at + 3]]);
            body[at..at + 4].copy_from_slice(&(offset + HEADER).to_be_bytes());
        }
        out.extend_from_slice(&body);
        out
    }
    
    #[test]
    fn outline_metrics_are_positive() {
        let Some(face) = crate::text::installed_outline_face() else { return };
        let font = face.at(28.0);
        assert!(!font.is_builtin());
        assert!(font.ascent() > 0.0);
        assert!(font.descent() > 0.0);
        assert!(font.ascent() > font.descent());
        assert!(font.line_height() > 28.0 * 0.9);
    }
    
    #[test]
    fn outline_glyphs_sit_on_the_baseline() {
        let Some(face) = crate::text::installed_outline_face() else { return };
        let font = face.at(48.0);
        
        let cap = font.rasterize('H');
        assert!(cap.top < 0, "cap height is above the baseline: {cap:?}");
        assert!((cap.top + cap.height as i32).abs() <= 1);
        assert!(cap.coverage.iter().any(|&c| c > 0));
        
        let descender = font.rasterize('p');
        assert!(descender.top < 0);
        assert!(descender.top + descender.height as i32 > 5);
        
        let space = font.rasterize(' ');
        assert!(space.coverage.iter().all(|&c| c == 0));
    }
    
    #[test]
    fn outline_measure_includes_kerning() {
        let Some(face) = crate::text::installed_outline_face() else { return };
        let font = face.at(48.0);
        let FontFace::Vector { font: raw, .. } = font.face() else {
            panic!("expected an outline face");
        };
        let kern = raw.horizontal_kern('A', 'V', 48.0).unwrap_or(0.0);
        
        assert_relative_eq!(font.advance('A', Some('V')), font.advance('A', None) + kern, epsilon = 1e-3);
        assert_relative_eq!(font.measure("AV"), font.measure("A") + font.measure("V") + kern, epsilon = 1e-3);
        assert_relative_eq!(
            font.measure("HH"),
            2.0 * raw.metrics('H', 48.0).advance_width + raw.horizontal_kern('H', 'H', 48.0).unwrap_or(0.0),
            epsilon = 1e-3
        );
    }
    
    #[test]
    fn collection_loads_its_first_face() {
        let Some(face) = crate::text::installed_outline_face() else { return };
        let FontFace::Vector { source, .. } = &face else {
            panic!("expected an outline face");
        };
        let bytes = std::fs::read(source).unwrap();
        
        let collected = FontFace::from_bytes(wrap_in_collection(&bytes), Path::new("Collected.ttc")).unwrap();
        assert!(!collected.is_builtin());
        assert_eq!(collected.at(48.0).rasterize('R'), face.at(48.0).rasterize('R'));
        assert_relative_eq!(collected.at(48.0).measure("Repair"), face.at(48.0).measure("Repair"));
    }
    
    #[test]
    fn builtin_handle_measures_monospace() {
        let font = FontHandle::builtin(16.0);
        assert!(font.is_builtin());
        assert_eq!(font.measure("abcd"), 4.0 * font.advance('a', None));
        assert!(font.line_height() > 0.0);
    }
}
