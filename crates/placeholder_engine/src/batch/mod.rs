//! Batch generation
//!
//! A manifest lists the images to produce and where they go. Running a
//! batch renders each record in order and writes exactly one file per
//! record; the first failure aborts the run.

mod manifest;

#[cfg(test)]
mod tests;

pub use manifest::{MockupManifest, ThumbnailManifest, MOCKUP_OUTPUT_DIR, THUMBNAIL_OUTPUT_DIR};

use std::path::{Path, PathBuf};

use crate::assets::{ensure_dir, save_canvas};
use crate::error::Result;
use crate::render::{MockupRenderer, ThumbnailRenderer};
use crate::text::FontResolver;

/// Render every mockup in the manifest below `root`, returning the written paths
pub fn run_mockups(manifest: &MockupManifest, root: &Path, resolver: &FontResolver) -> Result<Vec<PathBuf>> {
    let dir = root.join(&manifest.output_dir);
    ensure_dir(&dir)?;
    
    let renderer = MockupRenderer::new(resolver);
    let mut written = Vec::with_capacity(manifest.screens.len());
    for spec in &manifest.screens {
        let canvas = renderer.render_spec(spec);
        let path = dir.join(&spec.file_name);
        save_canvas(&canvas, &path)?;
        written.push(path);
    }
    
    log::info!("Generated {} mockup(s) in {:?}", written.len(), dir);
    Ok(written)
}

/// Render every thumbnail in the manifest below `root`, returning the written paths
pub fn run_thumbnails(manifest: &ThumbnailManifest, root: &Path, resolver: &FontResolver) -> Result<Vec<PathBuf>> {
    let dir = root.join(&manifest.output_dir);
    ensure_dir(&dir)?;
    
    let renderer = ThumbnailRenderer::new(resolver);
    let mut written = Vec::with_capacity(manifest.repairs.len());
    for spec in &manifest.repairs {
        let canvas = renderer.render_spec(spec);
        let path = dir.join(spec.file_name());
        save_canvas(&canvas, &path)?;
        written.push(path);
    }
    
    log::info!("Generated {} thumbnail(s) in {:?}", written.len(), dir);
    Ok(written)
}
