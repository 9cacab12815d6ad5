//! Generates the mobile repair form mockups
//!
//! Writes the screens of the repair request flow into
//! `public/images/repair-form/`. An optional manifest path (`.toml` or
//! `.ron`) replaces the built-in screen list.

use std::path::Path;

use placeholder_engine::foundation::logging;
use placeholder_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    
    let manifest = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading mockup manifest from {}", path);
            MockupManifest::load_from_file(&path).map_err(GeneratorError::from)?
        }
        None => MockupManifest::default(),
    };
    
    let resolver = FontResolver::system();
    for path in run_mockups(&manifest, Path::new("."), &resolver)? {
        println!("Generated {}", path.strip_prefix(".").unwrap_or(&path).display());
    }
    Ok(())
}
