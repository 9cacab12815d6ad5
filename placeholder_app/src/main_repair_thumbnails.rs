//! Generates the repair listing thumbnails
//!
//! Writes `repair-<id>.jpg` placeholders into `client/public/repairs/`.
//! An optional manifest path (`.toml` or `.ron`) replaces the built-in
//! repair list.

use std::path::Path;

use placeholder_engine::foundation::logging;
use placeholder_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    
    let manifest = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading thumbnail manifest from {}", path);
            ThumbnailManifest::load_from_file(&path).map_err(GeneratorError::from)?
        }
        None => ThumbnailManifest::default(),
    };
    
    let resolver = FontResolver::system();
    for path in run_thumbnails(&manifest, Path::new("."), &resolver)? {
        if let Some(name) = path.file_name() {
            println!("Generated {}", name.to_string_lossy());
        }
    }
    Ok(())
}
