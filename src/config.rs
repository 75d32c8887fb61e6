//! Configuration file support for addon-sync.
//!
//! Provides YAML-based configuration through `addon-sync.config.yml`
//! files discovered in the addon directory. CLI flags take precedence
//! over config values, which take precedence over the built-in layout
//! defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "addon-sync.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Overrides the default target manifest location. Relative paths are
    /// resolved against the addon directory.
    pub target_manifest: Option<PathBuf>,
    /// Overrides the default stylesheet location. Relative paths are
    /// resolved against the addon directory.
    pub stylesheet: Option<PathBuf>,
    /// Default for the --quiet flag.
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in the addon directory. Returns `None` silently if not found.
pub fn discover_config(addon_dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = addon_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
