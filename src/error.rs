//! Error types for the YouTube command-line samples.
//!
//! Classifies failures into the kinds the binaries handle differently:
//! configuration problems are fatal, everything else is printed and the
//! process exits normally.

use std::io::{self, Write};
use thiserror::Error;

/// Result type for all library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the samples.
#[derive(Debug, Error)]
pub enum Error {
    /// Properties resource missing, unreadable, or without an API key.
    #[error("configuration error: {0}")]
    Config(String),

    /// Structured error response from the Data API.
    #[error("service error: {code} : {message}")]
    Api {
        /// Numeric error code reported by the service
        code: i64,
        /// Error message reported by the service
        message: String,
    },

    /// Network or terminal I/O failure before or while receiving a response.
    #[error("IO error: {0}")]
    Transport(anyhow::Error),

    /// Anything the other kinds do not cover.
    #[error("unexpected error: {0}")]
    Unexpected(anyhow::Error),
}

impl Error {
    /// Write the diagnostic line for this error.
    ///
    /// # Arguments
    /// * `out` - Destination, normally standard error
    ///
    /// # Returns
    /// * `io::Result<()>` - Success or write failure
    ///
    /// # Details
    /// Each kind gets a single line prefixed with its category label.
    /// Unexpected errors print their full cause chain.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Error::Config(message) => {
                writeln!(out, "There was an error reading the configuration: {message}")
            }
            Error::Api { code, message } => {
                writeln!(out, "There was a service error: {code} : {message}")
            }
            Error::Transport(err) => writeln!(out, "There was an IO error: {err}"),
            Error::Unexpected(err) => writeln!(out, "There was an unexpected error: {err:?}"),
        }
    }

    /// Whether the process should terminate with a non-zero exit code.
    ///
    /// # Returns
    /// * `bool` - True only for configuration errors
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Transport(err.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Unexpected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_has_code_and_message() {
        let err = Error::Api {
            code: 403,
            message: "quotaExceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("quotaExceeded"));
    }

    #[test]
    fn test_api_error_diagnostic_has_code_and_message() {
        let err = Error::Api {
            code: 403,
            message: "quotaExceeded".to_string(),
        };
        let mut out = Vec::new();
        err.write_diagnostic(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "There was a service error: 403 : quotaExceeded\n");
    }

    #[test]
    fn test_only_config_errors_are_fatal() {
        assert!(Error::Config("missing file".to_string()).is_fatal());
        assert!(
            !Error::Api {
                code: 404,
                message: "videoNotFound".to_string()
            }
            .is_fatal()
        );
        assert!(!Error::Transport(anyhow::anyhow!("connection refused")).is_fatal());
        assert!(!Error::Unexpected(anyhow::anyhow!("boom")).is_fatal());
    }

    #[test]
    fn test_io_error_maps_to_transport() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Transport(_)));
    }
}
