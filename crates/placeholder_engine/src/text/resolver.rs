//! Ordered font fallback
//!
//! Candidates are tried in priority order. A candidate is either a path to
//! a font file or a bare family name looked up as `<name>.ttf`/`.ttc`/`.otf`
//! in the platform font directories. When every candidate fails the
//! built-in bitmap face is used, so resolution never fails.

use std::path::{Path, PathBuf};

use super::font::{FontError, FontFace, FontHandle, FontResult};

/// Font candidates in priority order
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "Arial",
    "DejaVuSans",
    "FreeSans",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "ttc", "otf"];

/// How deep to descend into font directories
const MAX_SEARCH_DEPTH: usize = 4;

/// Platform font directories searched for bare family names
fn system_font_dirs() -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        vec![PathBuf::from("C:\\Windows\\Fonts")]
    } else if cfg!(target_os = "macos") {
        ["/Library/Fonts", "/System/Library/Fonts", "/System/Library/Fonts/Supplemental"]
            .iter()
            .map(PathBuf::from)
            .collect()
    } else {
        unix_font_dirs(
            std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }
}

/// User font directories first, then the shared ones
///
/// `$XDG_DATA_HOME` falls back to `~/.local/share` when unset or empty.
fn unix_font_dirs(data_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let data_home = data_home
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| home.as_ref().map(|h| h.join(".local").join("share")));
    
    let mut dirs = Vec::new();
    if let Some(data_home) = data_home {
        dirs.push(data_home.join("fonts"));
    }
    if let Some(home) = home {
        dirs.push(home.join(".fonts"));
    }
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs
}

/// Resolves font candidates with a guaranteed fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResolver {
    candidates: Vec<String>,
    search_dirs: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl FontResolver {
    /// Create a resolver with explicit candidates and search directories
    pub fn new<I, S>(candidates: I, search_dirs: Vec<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            search_dirs,
        }
    }
    
    /// The default candidate list searched in the platform font directories
    pub fn system() -> Self {
        Self::new(DEFAULT_CANDIDATES, system_font_dirs())
    }
    
    /// A resolver that always yields the built-in font
    pub fn builtin_only() -> Self {
        Self::new(Vec::<String>::new(), Vec::new())
    }
    
    /// Candidate names in priority order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
    
    /// Resolve the first loadable face, falling back to the built-in face
    pub fn resolve_face(&self) -> FontFace {
        for name in &self.candidates {
            match self.load_candidate(name) {
                Ok(face) => {
                    log::debug!("Resolved font candidate '{}' to {:?}", name, face);
                    return face;
                }
                Err(e) => log::debug!("Skipping font candidate '{}': {}", name, e),
            }
        }
        log::info!("No font candidate could be loaded; using the built-in bitmap font");
        FontFace::Builtin
    }
    
    /// Resolve a face and pin it to a pixel size
    pub fn resolve(&self, px: f32) -> FontHandle {
        self.resolve_face().at(px)
    }
    
    /// Try only the highest-priority candidate
    pub fn resolve_primary(&self, px: f32) -> Option<FontHandle> {
        let name = self.candidates.first()?;
        match self.load_candidate(name) {
            Ok(face) => Some(face.at(px)),
            Err(e) => {
                log::debug!("Primary font candidate '{}' unavailable: {}", name, e);
                None
            }
        }
    }
    
    /// Load a single candidate by path or family name
    pub fn load_candidate(&self, name: &str) -> FontResult<FontFace> {
        let path = self
            .locate(name)
            .ok_or_else(|| FontError::NotFound(name.to_string()))?;
        FontFace::from_file(&path)
    }
    
    /// Find the file a candidate refers to
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }
        if direct.components().count() > 1 {
            return None;
        }
        self.search_dirs
            .iter()
            .find_map(|dir| find_font_file(dir, name, MAX_SEARCH_DEPTH))
    }
}

fn matches_family(path: &Path, family: &str) -> bool {
    let stem_matches = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case(family));
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
    stem_matches && ext_matches
}

fn find_font_file(dir: &Path, family: &str, depth: usize) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    // read_dir order is unspecified
    entries.sort();
    
    if let Some(hit) = entries.iter().find(|p| p.is_file() && matches_family(p, family)) {
        return Some(hit.clone());
    }
    if depth == 0 {
        return None;
    }
    entries
        .iter()
        .filter(|p| p.is_dir())
        .find_map(|sub| find_font_file(sub, family, depth - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("placeholder-fonts-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
    
    #[test]
    fn empty_candidate_list_yields_builtin() {
        let resolver = FontResolver::builtin_only();
        assert!(resolver.resolve(28.0).is_builtin());
        assert!(resolver.resolve_primary(36.0).is_none());
    }
    
    #[test]
    fn unloadable_candidates_fall_through_to_builtin() {
        let dir = scratch_dir("broken");
        std::fs::write(dir.join("Broken.ttf"), b"not a font").unwrap();
        let resolver = FontResolver::new(
            ["NoSuchFamily", "Broken", "/no/such/file.ttf"],
            vec![dir.clone()],
        );
        let handle = resolver.resolve(16.0);
        assert!(handle.is_builtin());
        assert_eq!(handle.px(), 16.0);
        std::fs::remove_dir_all(dir).unwrap();
    }
    
    #[test]
    fn family_lookup_searches_nested_directories() {
        let dir = scratch_dir("nested");
        let nested = dir.join("truetype").join("demo");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("DemoSans.TTF"), b"x").unwrap();
        std::fs::write(nested.join("DemoSans.txt"), b"x").unwrap();
        let resolver = FontResolver::new(["DemoSans"], vec![dir.clone()]);
        assert_eq!(resolver.locate("demosans"), Some(nested.join("DemoSans.TTF")));
        assert_eq!(resolver.locate("Other"), None);
        std::fs::remove_dir_all(dir).unwrap();
    }
    
    #[test]
    fn default_candidates_are_in_priority_order() {
        let resolver = FontResolver::system();
        assert_eq!(resolver.candidates()[0], "Arial");
        assert_eq!(resolver.candidates().len(), DEFAULT_CANDIDATES.len());
    }
    
    #[test]
    fn user_font_directories_come_before_shared_ones() {
        let dirs = unix_font_dirs(Some(PathBuf::from("/data")), Some(PathBuf::from("/home/me")));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/data/fonts"),
                PathBuf::from("/home/me/.fonts"),
                PathBuf::from("/usr/local/share/fonts"),
                PathBuf::from("/usr/share/fonts"),
            ]
        );
    }
    
    #[test]
    fn unset_data_home_falls_back_to_local_share() {
        let dirs = unix_font_dirs(Some(PathBuf::new()), Some(PathBuf::from("/home/me")));
        assert_eq!(dirs[0], PathBuf::from("/home/me/.local/share/fonts"));
        assert_eq!(dirs[1], PathBuf::from("/home/me/.fonts"));
        
        let no_home = unix_font_dirs(None, None);
        assert_eq!(
            no_home,
            vec![PathBuf::from("/usr/local/share/fonts"), PathBuf::from("/usr/share/fonts")]
        );
    }
}
