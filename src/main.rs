use owo_colors::{OwoColorize, Stream};
use std::path::{Path, PathBuf};
use std::process;

use addon_sync::cli::{Args, Command};
use addon_sync::shared::error::{ExitCode, SyncError};
use addon_sync::shared::Result;
use addon_sync::sync::DependencyChange;
use addon_sync::{config, layout, manifest::Manifest, stylesheet, sync};

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Deps {
            addon,
            target,
            dry_run,
        } => run_deps(addon, target, dry_run, args.quiet),
        Command::Fonts { addon, stylesheet } => run_fonts(addon, stylesheet),
    }
}

fn run_deps(
    addon: Option<PathBuf>,
    target: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
) -> Result<()> {
    let addon_dir = addon.unwrap_or_else(|| PathBuf::from("."));
    validate_addon_dir(&addon_dir)?;

    let config = config::discover_config(&addon_dir)?.unwrap_or_default();
    let quiet = quiet || config.quiet.unwrap_or(false);

    let target_path = target
        .or_else(|| {
            config
                .target_manifest
                .as_deref()
                .map(|p| layout::resolve_from(&addon_dir, p))
        })
        .unwrap_or_else(|| layout::default_target_manifest(&addon_dir));

    // Read and validate both documents fully before any write.
    let source = Manifest::load(&layout::addon_manifest(&addon_dir))?;
    let mut target_manifest = Manifest::load(&target_path)?;

    let changes = sync::sync_manifests(&source, &mut target_manifest)?;
    print_report(&changes, quiet);

    if dry_run {
        eprintln!(
            "Dry run: {} left unmodified ({} change(s))",
            target_manifest.path().display(),
            changes.len()
        );
    } else {
        target_manifest.write()?;
        eprintln!(
            "✅ Synchronized {} devDependencies into {} ({} change(s))",
            source.dev_dependencies()?.len(),
            target_manifest.path().display(),
            changes.len()
        );
    }

    Ok(())
}

fn run_fonts(addon: Option<PathBuf>, stylesheet_path: Option<PathBuf>) -> Result<()> {
    let addon_dir = addon.unwrap_or_else(|| PathBuf::from("."));
    validate_addon_dir(&addon_dir)?;

    let config = config::discover_config(&addon_dir)?.unwrap_or_default();

    let stylesheet_path = stylesheet_path
        .or_else(|| {
            config
                .stylesheet
                .as_deref()
                .map(|p| layout::resolve_from(&addon_dir, p))
        })
        .unwrap_or_else(|| layout::default_stylesheet(&addon_dir));

    let replaced = stylesheet::rewrite_stylesheet(&stylesheet_path)?;
    eprintln!(
        "✅ Rewrote {} ({} font URL(s) cleaned)",
        stylesheet_path.display(),
        replaced
    );

    Ok(())
}

/// One diagnostic line per change record, in merge order. Warnings always
/// print; informational lines are suppressed in quiet mode.
fn print_report(changes: &[DependencyChange], quiet: bool) {
    for change in changes {
        if change.is_warning() {
            println!(
                "{}: {}",
                "WARN".if_supports_color(Stream::Stdout, |text| text.yellow()),
                change
            );
        } else if !quiet {
            println!(
                "{}: {}",
                "INFO".if_supports_color(Stream::Stdout, |text| text.green()),
                change
            );
        }
    }
}

fn validate_addon_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SyncError::InvalidAddonDir {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: reject symbolic links for the addon directory
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SyncError::InvalidAddonDir {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SyncError::InvalidAddonDir {
            path: path.to_path_buf(),
            reason: "Security: addon path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SyncError::InvalidAddonDir {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
