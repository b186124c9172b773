//! Local music catalog
//!
//! The catalog is the list of playable files under the music directory,
//! cached in a plain-text index (one relative path per line) so the
//! directory is only walked when the index is missing.

use crate::config::MusicConfig;
use crate::core::text_normalizer::{normalize, strip_extension};
use crate::error::{MusicError, MusicResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// One playable file, relative to the music directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: String,
    /// Normalized base name used for fuzzy matching
    pub match_key: String,
}

impl CatalogEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let match_key = normalize(strip_extension(&path));
        Self { path, match_key }
    }
}

/// Ordered, read-only list of playable files
#[derive(Debug, Clone)]
pub struct Catalog {
    base_dir: PathBuf,
    available: bool,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(base_dir: impl Into<PathBuf>, paths: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            available: true,
            entries: paths.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    /// Catalog for a music directory that does not exist
    pub fn unavailable(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            available: false,
            entries: Vec::new(),
        }
    }

    /// Whether the music directory existed when the catalog was loaded
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Uniformly random entry, None when empty
    pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CatalogEntry> {
        self.entries.choose(rng)
    }

    /// Absolute location of an entry on disk
    pub fn resolve_path(&self, entry_path: &str) -> PathBuf {
        self.base_dir.join(entry_path)
    }
}

/// Builds and persists the catalog for one music directory
#[derive(Debug, Clone)]
pub struct LocalLibrary {
    music_dir: PathBuf,
    index_path: PathBuf,
    extensions: Vec<String>,
}

impl LocalLibrary {
    pub fn new(config: &MusicConfig) -> Self {
        Self {
            music_dir: config.absolute_music_dir(),
            index_path: config.index_path(),
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn music_dir(&self) -> &Path {
        &self.music_dir
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Load from the index file if present, otherwise scan and persist
    pub fn load(&self) -> Catalog {
        if !self.music_dir.is_dir() {
            warn!(
                "⚠️ Music directory not found: {}, music playback unavailable",
                self.music_dir.display()
            );
            return Catalog::unavailable(&self.music_dir);
        }

        if self.index_path.exists() {
            match self.read_index() {
                Ok(paths) => {
                    info!("🎵 Loaded {} music files from index", paths.len());
                    return Catalog::new(&self.music_dir, paths);
                }
                Err(e) => {
                    error!("❌ Failed to read music index: {}", e);
                    // Leave the unreadable index alone, serve a fresh scan
                    let paths = self.scan_directory();
                    info!("🎵 Scanned {} music files after index failure", paths.len());
                    return Catalog::new(&self.music_dir, paths);
                }
            }
        }

        self.rescan()
    }

    /// Walk the directory, rewrite the index and return the new catalog
    pub fn rescan(&self) -> Catalog {
        if !self.music_dir.is_dir() {
            warn!(
                "⚠️ Music directory not found: {}, music playback unavailable",
                self.music_dir.display()
            );
            return Catalog::unavailable(&self.music_dir);
        }

        let paths = self.scan_directory();
        if paths.is_empty() {
            warn!(
                "⚠️ No {} files found in {}",
                self.extensions.join("/"),
                self.music_dir.display()
            );
        } else {
            match self.write_index(&paths) {
                Ok(()) => {
                    info!("🎵 Scanned {} music files from directory", paths.len());
                    debug!("Music index written: {:?}", paths);
                }
                Err(e) => error!("❌ Failed to write music index: {}", e),
            }
        }

        Catalog::new(&self.music_dir, paths)
    }

    /// Non-blank, trimmed lines of the index file in file order
    pub fn read_index(&self) -> MusicResult<Vec<String>> {
        let content = std::fs::read_to_string(&self.index_path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    pub fn write_index(&self, paths: &[String]) -> MusicResult<()> {
        std::fs::write(&self.index_path, paths.join("\n"))?;
        Ok(())
    }

    /// Relative paths of every supported file under the music directory
    pub fn scan_directory(&self) -> Vec<String> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.music_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.is_supported(entry.path()) {
                continue;
            }
            match relative_path(&self.music_dir, entry.path()) {
                Ok(rel) => files.push(rel),
                Err(e) => debug!("Skipping {}: {}", entry.path().display(), e),
            }
        }

        files
    }

    fn is_supported(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)))
    }
}

/// `path` relative to `root`, joined with '/'
fn relative_path(root: &Path, path: &Path) -> MusicResult<String> {
    let rel = path
        .strip_prefix(root)
        .map_err(|e| MusicError::Catalog(e.to_string()))?;

    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| MusicError::Catalog(format!("non UTF-8 path: {}", rel.display())))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Load the catalog for `base_dir` with default settings
pub fn load(base_dir: &Path) -> Catalog {
    LocalLibrary::new(&MusicConfig::with_dir(base_dir)).load()
}

/// Rescan `base_dir` with default settings, rewriting its index
pub fn rescan(base_dir: &Path) -> Catalog {
    LocalLibrary::new(&MusicConfig::with_dir(base_dir)).rescan()
}
