//! Default directory layout for an embedded addon.
//!
//! Historically both scripts ran from a fixed layout: the addon checked
//! out two levels below the parent project root, with its static assets
//! under `public/assets`. These defaults keep that behavior; every path
//! can be overridden by CLI flags or the config file.

use std::path::{Path, PathBuf};

/// Target manifest relative to the addon root: the parent project's
/// package.json two levels up.
pub const TARGET_MANIFEST_RELATIVE: &str = "../../package.json";

/// Stylesheet relative to the addon root.
pub const STYLESHEET_RELATIVE: &str = "public/assets/fonts/fonts.css";

pub fn addon_manifest(addon_dir: &Path) -> PathBuf {
    addon_dir.join("package.json")
}

pub fn default_target_manifest(addon_dir: &Path) -> PathBuf {
    addon_dir.join(TARGET_MANIFEST_RELATIVE)
}

pub fn default_stylesheet(addon_dir: &Path) -> PathBuf {
    addon_dir.join(STYLESHEET_RELATIVE)
}

/// Resolve a configured path against the addon root. Absolute paths are
/// used as-is.
pub fn resolve_from(addon_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        addon_dir.join(path)
    }
}
