//! Filesystem locations for logs, config and persisted flags.

use std::ffi::OsString;
use std::path::PathBuf;

/// Debug log written by the `welcomer` binary.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("welcomer.log")
}

fn home_from(env: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    #[cfg(windows)]
    if let Some(profile) = env("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }
    env("HOME").map(PathBuf::from)
}

fn data_local_from(env: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    #[cfg(windows)]
    {
        env("LOCALAPPDATA")
            .or_else(|| env("APPDATA"))
            .map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        if let Some(xdg) = env("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg));
        }
        let home = home_from(env)?;
        if cfg!(target_os = "macos") {
            Some(home.join("Library").join("Application Support"))
        } else {
            Some(home.join(".local").join("share"))
        }
    }
}

fn config_from(env: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    #[cfg(windows)]
    {
        env("APPDATA").map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        if let Some(xdg) = env("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        let home = home_from(env)?;
        if cfg!(target_os = "macos") {
            Some(home.join("Library").join("Application Support"))
        } else {
            Some(home.join(".config"))
        }
    }
}

/// Local application data directory for the current platform.
#[must_use]
pub fn data_local_dir() -> Option<PathBuf> {
    data_local_from(&mut |key| std::env::var_os(key))
}

/// User configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_from(&mut |key| std::env::var_os(key))
}

/// Where the binary looks for a welcome config when `--config` is omitted.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("welcomer")
        .join("welcome.json")
}
