use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every artifact resolved (or missing artifacts tolerated)
    Success = 0,
    /// Resolution finished but a binary artifact has no download URL
    MissingArtifacts = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, failed resolution run, file I/O error, etc.)
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
            ExitCode::MissingArtifacts => write!(f, "Missing Artifacts (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint text next to each failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid config file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid repository URL: {url}\nReason: {reason}\n\n💡 Hint: Repository URLs must be absolute http:// or https:// URLs")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("Invalid coordinate: {coordinate}\nReason: {reason}\n\n💡 Hint: Use the form groupId:artifactId")]
    InvalidCoordinate { coordinate: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
