//! Error handling for the cini application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::USAGE;

/// Custom error types for cini operations.
///
/// This enum represents all possible errors that can occur while resolving
/// the configuration or emitting the project skeleton.
#[derive(Error, Debug)]
pub enum Error {
    /// No arguments were supplied at all.
    #[error("no arguments supplied")]
    MissingArguments,

    /// No project name was given, or the given one is empty.
    #[error(
        "project name must be specified (either as a positional argument or with --name=<name>)"
    )]
    MissingProjectName,

    /// The strictness token is not an integer.
    #[error("invalid strictness level '{value}': expected an integer (0, 1 or 2)")]
    InvalidStrictness { value: String },

    /// The project argument has no final path segment to name the project after.
    #[error("cannot derive a project name from '{path}'")]
    InvalidProjectPath { path: String },

    /// Argument parsing failed inside clap.
    #[error("argument error: {0}")]
    ArgumentError(#[from] clap::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A file system operation failed on a known path.
    #[error("failed to {action} '{}': {source}", .path.display())]
    FileSystemError {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl Error {
    /// Returns true for errors caused by how the program was invoked.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArguments | Error::MissingProjectName | Error::ArgumentError(_)
        )
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Usage errors are followed by the usage text. Always exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::MissingArguments => eprint!("{USAGE}"),
        ref e if e.is_usage_error() => eprint!("Error: {e}.\n{USAGE}"),
        e => eprintln!("Error: {e}"),
    }
    std::process::exit(1);
}
