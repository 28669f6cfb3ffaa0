//! Error handling for rust-bridge.
//! Defines the error taxonomy and result type used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a rust-bridge invocation.
///
/// Every variant is fatal to the current command. There is no partial-success
/// state: the first error stops generation and is reported by
/// [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// The input path given on the command line does not exist
    #[error("Path does not exist: '{path}'.")]
    NotFound { path: PathBuf },

    /// The manifest is not well-formed TOML or has fields of the wrong type
    #[error("Failed to parse manifest '{path}': {reason}.")]
    Parse { path: PathBuf, reason: String },

    /// A template references a placeholder or filter that cannot be resolved
    #[error("Render error: {0}.")]
    Render(String),

    /// A directory or file could not be created or written
    #[error("IO error at '{path}': {source}.")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an IO error together with the path that caused it.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
