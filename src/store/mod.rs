//! Persisted "has seen" flags
//!
//! The gate never touches global state directly; it is handed a
//! [`SeenStore`] and reads or writes one boolean per welcome key through it.

mod file;
mod memory;

pub use file::{FileStore, STATE_PATH_ENV, SeenEntry};
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Key used when the host does not name its onboarding flow.
pub const DEFAULT_WELCOME_KEY: &str = "hasSeenWelcomeView";

/// Errors raised by a [`SeenStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not valid store JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that could not be parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The backend is not reachable at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value capability holding one boolean per welcome key.
///
/// All access happens on the UI thread, so implementations need no locking.
pub trait SeenStore {
    /// Read the flag for `key`; an absent entry reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<bool, StoreError>;

    /// Write the flag for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, seen: bool) -> Result<(), StoreError>;

    /// Remove the entry for `key` so it reads as unseen again.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: SeenStore + ?Sized> SeenStore for Box<S> {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, seen: bool) -> Result<(), StoreError> {
        (**self).set(key, seen)
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).clear(key)
    }
}
