use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the document was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing input, discovery failure, I/O error, etc.)
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

/// Application-specific errors for SBOM generation.
///
/// Every variant names the path involved and the operation that failed so the
/// CLI can report the first failure of a build to a human.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Path not found: {path}\nOperation: {operation}\n\n💡 Hint: Please verify that the path exists and is readable")]
    NotFound {
        path: PathBuf,
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error("Package discovery failed: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifests under this path are well-formed")]
    Discovery { path: PathBuf, details: String },

    #[error("I/O error on {path} during {operation}: {source}\n\n💡 Hint: Please verify that you have read permissions")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to resolve input: {pattern}\nReason: {reason}\n\n💡 Hint: Specify an existing file or directory, or a glob pattern that matches at least one file")]
    Build { pattern: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    Write { path: PathBuf, details: String },

    #[error("Invalid document: {message}")]
    Document { message: String },

    /// Validation error for builder patterns
    #[error("Invalid build request: {message}")]
    InvalidRequest { message: String },
}

impl SbomError {
    /// Classifies an I/O error, keeping "not found" distinct from other failures.
    pub fn from_io(path: &Path, operation: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            SbomError::NotFound {
                path: path.to_path_buf(),
                operation: operation.to_string(),
                source,
            }
        } else {
            SbomError::Io {
                path: path.to_path_buf(),
                operation: operation.to_string(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SbomError::NotFound { .. })
    }
}

/// Returns true when an error chain carries a `SbomError::NotFound`.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SbomError>()
        .is_some_and(SbomError::is_not_found)
}
