//! addon-sync - maintenance tooling for embedded front-end addon packages
//!
//! Two independent, stateless routines:
//!
//! - **Dependency synchronization**: merge the addon's declared
//!   devDependencies into the parent project's package.json, with
//!   override-and-log semantics and alphabetically sorted output.
//! - **Stylesheet rewriting**: strip cache-busting query strings from
//!   font URLs in a stylesheet, in place.
//!
//! # Example
//!
//! ```no_run
//! use addon_sync::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let source = Manifest::load(Path::new("lib/my-addon/package.json"))?;
//! let mut target = Manifest::load(Path::new("package.json"))?;
//!
//! let changes = sync_manifests(&source, &mut target)?;
//! for change in &changes {
//!     println!("{}", change);
//! }
//! target.write()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod layout;
pub mod manifest;
pub mod shared;
pub mod stylesheet;
pub mod sync;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cli::{Args, Command};
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::manifest::{DependencyMap, Manifest};
    pub use crate::shared::error::{ExitCode, SyncError};
    pub use crate::shared::Result;
    pub use crate::stylesheet::{rewrite_stylesheet, strip_cache_bust};
    pub use crate::sync::{merge_dev_dependencies, sync_manifests, DependencyChange};
}
