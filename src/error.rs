//! Error handling for the gobundle application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for gobundle operations.
///
/// Every failure is terminal for the run: there is no retry policy and no
/// partial-success mode anywhere in the tool.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A derived identifier collides with a Go reserved keyword
    #[error("reserved keyword: {name:?} cannot be used as an identifier")]
    ReservedIdentifier { name: String },

    /// Package name was required but could not be discovered
    #[error("package resolution error: {0}")]
    PackageResolution(String),
}

/// Convenience type alias for Results with gobundle's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1.
/// A failed run's output artifact is not guaranteed well-formed and must be
/// discarded by the caller.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
