//! JSON-file store under the local data directory.

use super::{SeenStore, StoreError};
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the store file location.
pub const STATE_PATH_ENV: &str = "WELCOMER_STATE_PATH";

/// One persisted flag and when it was last written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenEntry {
    /// Whether the welcome screen was dismissed
    pub seen: bool,
    /// Time of the last write
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, SeenEntry>,
}

const fn default_version() -> u32 {
    1
}

impl StoreFile {
    const fn empty() -> Self {
        Self {
            version: default_version(),
            entries: BTreeMap::new(),
        }
    }
}

/// Flags persisted as a JSON document.
///
/// Every call re-reads the file so separate processes see each other's
/// writes; a missing file is an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at an explicit path. The file is created on first write.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at [`Self::default_path`].
    #[must_use]
    pub fn open_default() -> Self {
        Self::at(Self::default_path())
    }

    /// Location of the store file.
    ///
    /// Uses `WELCOMER_STATE_PATH` when set, otherwise
    /// `<data_local_dir>/welcomer/seen.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(STATE_PATH_ENV) {
            return PathBuf::from(path);
        }
        paths::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("welcomer")
            .join("seen.json")
    }

    /// Path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted entries, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn entries(&self) -> Result<Vec<(String, SeenEntry)>, StoreError> {
        Ok(self.read()?.entries.into_iter().collect())
    }

    /// The entry for `key`, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn entry(&self, key: &str) -> Result<Option<SeenEntry>, StoreError> {
        Ok(self.read()?.entries.get(key).copied())
    }

    fn read(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            return Ok(StoreFile::empty());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the file before modifying it. A corrupt file is replaced by an
    /// empty one; the returned flag is `true` when that happened.
    fn read_for_update(&self) -> Result<(StoreFile, bool), StoreError> {
        match self.read() {
            Ok(file) => Ok((file, false)),
            Err(StoreError::Parse { path, source }) => {
                warn!("Failed to parse welcome flags at {path:?}, starting fresh: {source}");
                Ok((StoreFile::empty(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write(&self, file: &StoreFile) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = serde_json::to_string_pretty(file).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, contents).map_err(io_err)?;
        debug!("Saved welcome flags to {:?}", self.path);
        Ok(())
    }
}

impl SeenStore for FileStore {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entry(key)?.is_some_and(|entry| entry.seen))
    }

    fn set(&mut self, key: &str, seen: bool) -> Result<(), StoreError> {
        let (mut file, _) = self.read_for_update()?;
        file.entries.insert(
            key.to_string(),
            SeenEntry {
                seen,
                updated_at: Utc::now(),
            },
        );
        self.write(&file)
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        let (mut file, repaired) = self.read_for_update()?;
        if file.entries.remove(key).is_none() && !repaired {
            return Ok(());
        }
        self.write(&file)
    }
}
