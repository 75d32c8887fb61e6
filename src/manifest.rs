use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::shared::error::SyncError;
use crate::shared::{fsio, Result};

/// Ordered mapping from package name to version specifier.
///
/// Iteration order matches the order in which entries were inserted, so a
/// mapping extracted from a manifest iterates in file order. That ordering
/// drives the diagnostic sequence of a merge.
pub type DependencyMap = IndexMap<String, String>;

/// A package.json document bound to its path on disk.
///
/// The full document is held as an order-preserving JSON object so that
/// members unrelated to the synchronization keep their file order when the
/// manifest is rewritten.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Load and parse a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "package.json does not exist at \"{}\".\n   \
                     Please check the addon directory and target path options.",
                    path.display()
                ),
            }
            .into());
        }

        let content = fsio::read_file_checked(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest content. The document root must be a JSON object.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| SyncError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        match value {
            Value::Object(doc) => Ok(Self {
                path: path.to_path_buf(),
                doc,
            }),
            other => Err(SyncError::ManifestParseError {
                path: path.to_path_buf(),
                details: format!("Expected a JSON object at the top level, found {}", json_type_name(&other)),
            }
            .into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the devDependencies mapping in file order.
    ///
    /// Every version value must be a string; anything else is a fatal error
    /// surfaced before any write happens.
    pub fn dev_dependencies(&self) -> Result<DependencyMap> {
        let deps = self
            .doc
            .get("devDependencies")
            .and_then(Value::as_object)
            .ok_or_else(|| SyncError::MissingDependencyField {
                path: self.path.clone(),
            })?;

        let mut map = DependencyMap::with_capacity(deps.len());
        for (name, value) in deps {
            let version = value.as_str().ok_or_else(|| SyncError::InvalidVersionValue {
                path: self.path.clone(),
                name: name.clone(),
                found: value.to_string(),
            })?;
            map.insert(name.clone(), version.to_string());
        }
        Ok(map)
    }

    /// Replace the devDependencies member with the given mapping,
    /// preserving the mapping's iteration order in the document.
    pub fn set_dev_dependencies(&mut self, deps: &DependencyMap) {
        let mut object = serde_json::Map::with_capacity(deps.len());
        for (name, version) in deps {
            object.insert(name.clone(), Value::String(version.clone()));
        }
        self.doc
            .insert("devDependencies".to_string(), Value::Object(object));
    }

    /// Serialize as UTF-8 JSON with 2-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.doc).map_err(|e| {
            SyncError::ManifestParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write the manifest back to its path, truncating residual content.
    pub fn write(&self) -> Result<()> {
        let rendered = self.to_pretty_json()?;
        fsio::write_file_checked(&self.path, &rendered)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
