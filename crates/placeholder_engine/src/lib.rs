//! # Placeholder Engine
//!
//! Procedural placeholder images for fixture and demo assets.
//!
//! ## Features
//!
//! - **Mobile form mockups**: phone-sized screens of the repair request flow
//! - **Repair thumbnails**: gradient cards with a shadowed two-line caption
//! - **Font fallback**: ordered candidates ending in a built-in bitmap font
//! - **Draw batches**: layouts are inspectable lists of draw commands
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placeholder_engine::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = FontResolver::system();
//!     let canvas = MockupRenderer::new(&resolver).render(
//!         "Photo Documentation",
//!         "Upload photos of vehicle issues",
//!         ScreenVariant::Normal,
//!         SCREEN_SIZE,
//!     );
//!     save_canvas(&canvas, Path::new("mobile-upload.png"))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod canvas;
pub mod text;
pub mod render;
pub mod assets;
pub mod batch;

mod error;

pub use error::{GeneratorError, Result};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        GeneratorError,
        assets::{save_canvas, OutputFormat},
        batch::{run_mockups, run_thumbnails, MockupManifest, ThumbnailManifest},
        canvas::Canvas,
        config::Config,
        foundation::{
            color::{palette, Color},
            math::{Rect, Size},
        },
        render::{
            DrawBatch, DrawCommand,
            MockupRenderer, MockupSpec, ScreenVariant, SCREEN_SIZE,
            ThumbnailRenderer, ThumbnailSpec, THUMBNAIL_SIZE,
        },
        text::{FontResolver, FontRole, FontSet},
    };
}
