//! Image encoding for generated canvases
//!
//! PNG keeps UI mockups pixel exact; JPEG at quality 90 is used for the
//! photographic-style placeholders. The format follows the file extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::OutputError;
use crate::canvas::Canvas;

/// JPEG quality used for every JPEG output
pub const JPEG_QUALITY: u8 = 90;

/// Encoding chosen for an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG
    Png,
    /// Baseline JPEG
    Jpeg {
        /// Quality 1-100
        quality: u8,
    },
}

impl OutputFormat {
    /// `.jpg`/`.jpeg` (any case) encode as JPEG, everything else as PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                Self::Jpeg { quality: JPEG_QUALITY }
            }
            _ => Self::Png,
        }
    }
}

/// Create a directory and its parents if missing
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encode a canvas to `path`, picking the format from the extension
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<OutputFormat, OutputError> {
    let format = OutputFormat::from_path(path);
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let encode_err = |source| OutputError::Encode {
        path: path.to_path_buf(),
        source,
    };
    
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    let image = canvas.as_image();
    let (width, height) = image.dimensions();
    
    match format {
        OutputFormat::Png => PngEncoder::new(&mut writer)
            .write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(encode_err)?,
        OutputFormat::Jpeg { quality } => JpegEncoder::new_with_quality(&mut writer, quality)
            .write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(encode_err)?,
    }
    writer.flush().map_err(io_err)?;
    
    log::info!("Wrote {}x{} {:?} to {:?}", width, height, format, path);
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::rgb;
    use crate::foundation::math::Size;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("placeholder-writer-{}-{}", name, std::process::id()))
    }
    
    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/loading.jpeg")), OutputFormat::Jpeg { quality: 90 });
        assert_eq!(OutputFormat::from_path(Path::new("repair-1.JPG")), OutputFormat::Jpeg { quality: 90 });
        assert_eq!(OutputFormat::from_path(Path::new("mobile-main.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), OutputFormat::Png);
    }
    
    #[test]
    fn png_round_trips_exactly() {
        let dir = scratch_dir("png");
        ensure_dir(&dir).unwrap();
        let path = dir.join("swatch.png");
        
        let mut canvas = Canvas::new(Size::new(8, 4), rgb(10, 20, 30));
        canvas.set_pixel(3, 2, rgb(200, 100, 50));
        assert_eq!(save_canvas(&canvas, &path).unwrap(), OutputFormat::Png);
        
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(&decoded, canvas.as_image());
        std::fs::remove_dir_all(dir).unwrap();
    }
    
    #[test]
    fn jpeg_is_written_with_jpeg_signature() {
        let dir = scratch_dir("jpeg");
        ensure_dir(&dir).unwrap();
        let path = dir.join("photo.jpg");
        
        let canvas = Canvas::new(Size::new(16, 16), rgb(240, 240, 240));
        save_canvas(&canvas, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!(image::open(&path).unwrap().width(), 16);
        std::fs::remove_dir_all(dir).unwrap();
    }
    
    #[test]
    fn missing_directory_is_an_io_error() {
        let canvas = Canvas::new(Size::new(1, 1), rgb(0, 0, 0));
        let err = save_canvas(&canvas, Path::new("/no/such/dir/out.png")).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
