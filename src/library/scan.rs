use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "flac", "wav", "ogg", "m4a"];

pub(super) fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Audio files found under a sounds directory, keyed by lower-cased file name.
#[derive(Debug, Clone, Default)]
pub struct SoundIndex {
    root: Option<PathBuf>,
    files: HashMap<String, PathBuf>,
}

impl SoundIndex {
    /// An index with no files; only existing paths resolve.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walk `dir` recursively and index every audio file in it.
    ///
    /// Directories are walked in file-name order; when two files share a
    /// name, the first one in that order wins.
    pub fn scan(dir: &Path) -> Self {
        let mut files: HashMap<String, PathBuf> = HashMap::new();

        if !dir.is_dir() {
            warn!(dir = %dir.display(), "sounds directory not found");
            return Self {
                root: Some(dir.to_path_buf()),
                files,
            };
        }

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if !path.is_file() || !is_audio_file(path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                files
                    .entry(name.to_ascii_lowercase())
                    .or_insert_with(|| path.to_path_buf());
            }
        }

        debug!(dir = %dir.display(), count = files.len(), "indexed sounds");
        Self {
            root: Some(dir.to_path_buf()),
            files,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolve a resource locator to a playable file.
    ///
    /// Locators that already point at an existing file are used as-is;
    /// anything else is looked up by its file name.
    pub fn resolve(&self, locator: &str) -> Option<PathBuf> {
        let direct = Path::new(locator);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }

        let name = locator.rsplit('/').next().unwrap_or(locator);
        self.files.get(&name.to_ascii_lowercase()).cloned()
    }
}
