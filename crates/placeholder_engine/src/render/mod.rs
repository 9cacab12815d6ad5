//! Rendering module
//!
//! Layout functions turn a spec into a [`DrawBatch`]; renderers resolve
//! fonts and rasterize the batch onto a fresh [`Canvas`](crate::canvas::Canvas).

pub mod commands;
pub mod mockup;
pub mod thumbnail;

pub use commands::{DrawBatch, DrawCommand};
pub use mockup::{LayoutBlocks, MockupRenderer, MockupSpec, ParseVariantError, ScreenKind, ScreenVariant, SCREEN_SIZE};
pub use thumbnail::{ThumbnailRenderer, ThumbnailSpec, THUMBNAIL_SIZE};
