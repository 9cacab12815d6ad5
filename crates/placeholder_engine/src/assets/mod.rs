//! Asset output
//!
//! Encoding finished canvases and writing them to disk.

pub mod image_writer;

pub use image_writer::{ensure_dir, save_canvas, OutputFormat, JPEG_QUALITY};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing generated images
#[derive(Error, Debug)]
pub enum OutputError {
    /// Output directory could not be created
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
    
    /// File could not be opened or flushed
    #[error("Failed to write {path:?}: {source}")]
    Io {
        /// Destination file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
    
    /// Image encoder rejected the buffer
    #[error("Failed to encode {path:?}: {source}")]
    Encode {
        /// Destination file
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },
}
