//! End-to-end batch runs into scratch directories

use std::path::{Path, PathBuf};

use super::*;
use crate::assets::OutputFormat;
use crate::config::{Config, ConfigError};
use crate::render::{MockupSpec, ScreenVariant, ThumbnailSpec};

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("placeholder-batch-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
    
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn mockup_batch_writes_one_file_per_screen() {
    let scratch = ScratchDir::new("mockups");
    let manifest = MockupManifest::default();
    let written = run_mockups(&manifest, scratch.path(), &FontResolver::builtin_only()).unwrap();
    
    let dir = scratch.path().join("public/images/repair-form");
    assert_eq!(written.len(), 4);
    assert_eq!(written[0], dir.join("mobile-main.png"));
    assert_eq!(
        files_in(&dir),
        vec!["loading.jpeg", "mobile-main.png", "mobile-upload.png", "submitted.jpeg"]
    );
    
    for path in &written {
        let decoded = image::open(path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (400, 800));
        let bytes = std::fs::read(path).unwrap();
        match OutputFormat::from_path(path) {
            OutputFormat::Png => assert_eq!(&bytes[..4], b"\x89PNG"),
            OutputFormat::Jpeg { .. } => assert_eq!(&bytes[..2], &[0xFF, 0xD8]),
        }
    }
}

#[test]
fn thumbnail_batch_writes_one_jpeg_per_repair() {
    let scratch = ScratchDir::new("thumbnails");
    let manifest = ThumbnailManifest::default();
    let written = run_thumbnails(&manifest, scratch.path(), &FontResolver::builtin_only()).unwrap();
    
    let dir = scratch.path().join("client/public/repairs");
    assert_eq!(written.len(), 6);
    assert_eq!(
        files_in(&dir),
        vec![
            "repair-462.jpg",
            "repair-464.jpg",
            "repair-465.jpg",
            "repair-467.jpg",
            "repair-470.jpg",
            "repair-471.jpg",
        ]
    );
    let first = image::open(&written[0]).unwrap();
    assert_eq!((first.width(), first.height()), (800, 600));
}

#[test]
fn rerunning_a_batch_overwrites_in_place() {
    let scratch = ScratchDir::new("rerun");
    let manifest = ThumbnailManifest {
        output_dir: PathBuf::from("out"),
        repairs: vec![ThumbnailSpec::new("1", "Oil Change")],
    };
    let resolver = FontResolver::builtin_only();
    run_thumbnails(&manifest, scratch.path(), &resolver).unwrap();
    let first = std::fs::read(scratch.path().join("out/repair-1.jpg")).unwrap();
    run_thumbnails(&manifest, scratch.path(), &resolver).unwrap();
    let second = std::fs::read(scratch.path().join("out/repair-1.jpg")).unwrap();
    assert_eq!(first, second);
    assert_eq!(files_in(&scratch.path().join("out")).len(), 1);
}

#[test]
fn unwritable_output_aborts_the_batch() {
    let scratch = ScratchDir::new("blocked");
    // a plain file where the output directory should be
    std::fs::write(scratch.path().join("blocked"), b"").unwrap();
    let manifest = MockupManifest {
        output_dir: PathBuf::from("blocked"),
        ..MockupManifest::default()
    };
    let result = run_mockups(&manifest, scratch.path(), &FontResolver::builtin_only());
    assert!(matches!(result, Err(crate::error::GeneratorError::Output(_))));
}

#[test]
fn manifests_round_trip_through_toml_and_ron() {
    let scratch = ScratchDir::new("config");
    let manifest = MockupManifest::default();
    
    let toml_path = scratch.path().join("mockups.toml");
    manifest.save_to_file(&toml_path).unwrap();
    assert_eq!(MockupManifest::load_from_file(&toml_path).unwrap(), manifest);
    
    let ron_path = scratch.path().join("thumbnails.ron");
    let thumbnails = ThumbnailManifest::default();
    thumbnails.save_to_file(&ron_path).unwrap();
    assert_eq!(ThumbnailManifest::load_from_file(&ron_path).unwrap(), thumbnails);
}

#[test]
fn manifest_fields_have_defaults() {
    let scratch = ScratchDir::new("defaults");
    let path = scratch.path().join("short.toml");
    std::fs::write(
        &path,
        "output_dir = \"shots\"\n\n[[screens]]\nfile_name = \"a.png\"\ntitle = \"T\"\ndescription = \"D\"\n",
    )
    .unwrap();
    let manifest = MockupManifest::load_from_file(&path).unwrap();
    assert_eq!(manifest.screens, vec![MockupSpec::new("a.png", "T", "D", ScreenVariant::Normal)]);
}

#[test]
fn unknown_variant_in_manifest_fails_loudly() {
    let scratch = ScratchDir::new("variant");
    let path = scratch.path().join("bad.toml");
    std::fs::write(
        &path,
        "output_dir = \"shots\"\n\n[[screens]]\nfile_name = \"a.png\"\ntitle = \"T\"\ndescription = \"D\"\nvariant = \"splash\"\n",
    )
    .unwrap();
    let err = MockupManifest::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("splash")));
}
