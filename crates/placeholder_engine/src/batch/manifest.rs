//! Batch manifests
//!
//! `Default` is the fixed list of fixture images the application ships.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::render::{MockupSpec, ScreenVariant, ThumbnailSpec};

/// Where the mockups land, relative to the working directory
pub const MOCKUP_OUTPUT_DIR: &str = "public/images/repair-form";

/// Where the thumbnails land, relative to the working directory
pub const THUMBNAIL_OUTPUT_DIR: &str = "client/public/repairs";

/// The repair form mockup batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupManifest {
    /// Output directory
    pub output_dir: PathBuf,
    /// Screens to render, in order
    pub screens: Vec<MockupSpec>,
}

impl Default for MockupManifest {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(MOCKUP_OUTPUT_DIR),
            screens: vec![
                MockupSpec::new(
                    "mobile-main.png",
                    "Multilingual Support",
                    "Toggle between English and Spanish",
                    ScreenVariant::Normal,
                ),
                MockupSpec::new(
                    "mobile-upload.png",
                    "Photo Documentation",
                    "Upload photos of vehicle issues",
                    ScreenVariant::Normal,
                ),
                MockupSpec::new(
                    "loading.jpeg",
                    "Loading",
                    "Please wait while we prepare the form...",
                    ScreenVariant::Loading,
                ),
                MockupSpec::new(
                    "submitted.jpeg",
                    "Confirmation",
                    "Your repair request has been submitted successfully!",
                    ScreenVariant::Confirmation,
                ),
            ],
        }
    }
}

impl Config for MockupManifest {}

/// The repair thumbnail batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailManifest {
    /// Output directory
    pub output_dir: PathBuf,
    /// Repairs to render, in order
    pub repairs: Vec<ThumbnailSpec>,
}

impl Default for ThumbnailManifest {
    fn default() -> Self {
        let repairs = [
            ("471", "Alignment Issues"),
            ("470", "Transmission Issues"),
            ("467", "Body Damage"),
            ("465", "Electrical Issues"),
            ("464", "Oil Change"),
            ("462", "Window/Lock Problems"),
        ];
        Self {
            output_dir: PathBuf::from(THUMBNAIL_OUTPUT_DIR),
            repairs: repairs
                .iter()
                .map(|(id, category)| ThumbnailSpec::new(id, category))
                .collect(),
        }
    }
}

impl Config for ThumbnailManifest {}
