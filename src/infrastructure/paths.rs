//! Path utilities for locating content and log files.
//!
//! Handles tilde expansion and the default data directory, following the XDG base
//! directory convention on Unix-like systems.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "facetfolio";

/// Returns the default data directory for facetfolio content.
///
/// Resolves to `$XDG_DATA_HOME/facetfolio` when set, otherwise
/// `$HOME/.local/share/facetfolio`. Falls back to `./facetfolio` when neither variable
/// is available.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var("XDG_DATA_HOME").ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )
}

fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        (_, Some(home)) if !home.is_empty() => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR),
        _ => PathBuf::from(".").join(APP_DIR),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are returned
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    match home {
        Some(home) if path == "~" => PathBuf::from(home),
        Some(home) => path
            .strip_prefix("~/")
            .map_or_else(|| PathBuf::from(path), |rest| PathBuf::from(home).join(rest)),
        None => PathBuf::from(path),
    }
}
