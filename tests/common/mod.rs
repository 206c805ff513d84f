//! Common test utilities shared across integration tests

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use welcomer::FileStore;

/// A temporary directory holding a store file and config files.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Root of the fixture directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Where the store file lives; it does not exist until the first write.
    pub fn state_path(&self) -> PathBuf {
        self.root().join("state").join("seen.json")
    }

    /// A store backed by [`Self::state_path`].
    pub fn store(&self) -> FileStore {
        FileStore::at(self.state_path())
    }

    /// Write `json` as a config file and return its path.
    pub fn write_config(&self, name: &str, json: &str) -> io::Result<PathBuf> {
        let path = self.root().join(name);
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// A small config exercising links, icons and a privacy label.
pub const SAMPLE_CONFIG_JSON: &str = r##"{
    "app_name": "Lens",
    "intro_text": "Recognize images with [Lens](https://lens.test).",
    "features": [
        {"icon": "photo", "title": "Vision", "description": "Pick an image.", "color": "orange"},
        {"title": "Offline", "color": "#336699"}
    ],
    "primary_color": "green",
    "privacy_button_text": "Privacy"
}"##;
