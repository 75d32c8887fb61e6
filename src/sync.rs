//! Dependency synchronization between an addon manifest and its parent
//! project's manifest.
//!
//! The merge itself is pure: it takes two dependency mappings and returns
//! the merged mapping together with a list of change records. The caller
//! decides how to render or suppress the records.

use std::fmt;

use crate::manifest::{DependencyMap, Manifest};
use crate::shared::Result;

/// A single observable change produced by a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyChange {
    /// The package was absent from the target and has been added.
    Added { name: String, version: String },
    /// The package was present with a different version; the addon's
    /// version wins. The addon is treated as the source of truth, so this
    /// is reported as a warning rather than refused.
    Overridden {
        name: String,
        old: String,
        new: String,
    },
}

impl DependencyChange {
    /// Overrides are warnings; additions are informational.
    pub fn is_warning(&self) -> bool {
        matches!(self, DependencyChange::Overridden { .. })
    }
}

impl fmt::Display for DependencyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyChange::Added { name, version } => {
                write!(f, "devDependency \"{}\" added: {}", name, version)
            }
            DependencyChange::Overridden { name, old, new } => {
                write!(f, "devDependency \"{}\" overridden: {} -> {}", name, old, new)
            }
        }
    }
}

/// Merge the source mapping into the target mapping.
///
/// For every key in `source`: the source value wins when the key is absent
/// from `target` or the two values differ; an equal value is a no-op and
/// produces no record. Keys only present in `target` are preserved. The
/// returned mapping iterates in ascending lexicographic key order; the
/// change records follow `source`'s original iteration order.
pub fn merge_dev_dependencies(
    source: &DependencyMap,
    target: &DependencyMap,
) -> (DependencyMap, Vec<DependencyChange>) {
    let mut merged = target.clone();
    let mut changes = Vec::new();

    for (name, version) in source {
        match target.get(name) {
            None => {
                changes.push(DependencyChange::Added {
                    name: name.clone(),
                    version: version.clone(),
                });
                merged.insert(name.clone(), version.clone());
            }
            Some(existing) if existing != version => {
                changes.push(DependencyChange::Overridden {
                    name: name.clone(),
                    old: existing.clone(),
                    new: version.clone(),
                });
                merged.insert(name.clone(), version.clone());
            }
            Some(_) => {}
        }
    }

    merged.sort_keys();
    (merged, changes)
}

/// Merge the addon manifest's devDependencies into the target manifest.
///
/// Both mappings are extracted and validated before the target document is
/// touched, so a parse or field error can never leave a partial merge
/// behind. The target is only updated in memory; the caller decides
/// whether to persist it.
pub fn sync_manifests(source: &Manifest, target: &mut Manifest) -> Result<Vec<DependencyChange>> {
    let source_deps = source.dev_dependencies()?;
    let target_deps = target.dev_dependencies()?;

    let (merged, changes) = merge_dev_dependencies(&source_deps, &target_deps);
    target.set_dev_dependencies(&merged);
    Ok(changes)
}
