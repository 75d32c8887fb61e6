use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maintenance tooling for embedded front-end addon packages
#[derive(Parser, Debug)]
#[command(name = "addon-sync")]
#[command(version)]
#[command(about = "Sync addon devDependencies and fix font asset URLs", long_about = None)]
pub struct Args {
    /// Suppress informational diagnostics (warnings still print)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge the addon's devDependencies into the parent project's package.json
    Deps {
        /// Addon root directory (defaults to the current directory)
        #[arg(short, long)]
        addon: Option<PathBuf>,

        /// Target manifest (defaults to <addon>/../../package.json)
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Report changes without writing the target file
        #[arg(long)]
        dry_run: bool,
    },
    /// Strip cache-busting query strings from font URLs in the addon stylesheet
    Fonts {
        /// Addon root directory (defaults to the current directory)
        #[arg(short, long)]
        addon: Option<PathBuf>,

        /// Stylesheet to rewrite (defaults to <addon>/public/assets/fonts/fonts.css)
        #[arg(short, long)]
        stylesheet: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
