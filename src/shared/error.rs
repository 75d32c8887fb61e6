use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// argument errors and actual synchronization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all transforms applied (or nothing to do)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, parse error, missing field, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for manifest synchronization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest as JSON: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a well-formed JSON document with an object at the top level")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("No \"devDependencies\" object in {path}\n\n💡 Hint: The manifest must declare a \"devDependencies\" object, even an empty one")]
    MissingDependencyField { path: PathBuf },

    #[error("Invalid version for \"{name}\" in {path}: expected a string, found {found}")]
    InvalidVersionValue {
        path: PathBuf,
        name: String,
        found: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid addon directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the root directory of the addon package")]
    InvalidAddonDir { path: PathBuf, reason: String },
}
