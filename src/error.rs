//! Centralized error handling for AutoAnalyst.
//!
//! One enum covers the failure kinds the application distinguishes:
//! input parsing, analysis guards, report generation and configuration.
//! `From` implementations let the `?` operator convert library errors at
//! the boundary where they occur:
//!
//! ```
//! use autoanalyst::error::Error;
//!
//! fn describe(err: &Error) -> String {
//!     match err {
//!         Error::Generation(msg) => format!("model call failed: {msg}"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! The [`ResultExt`] trait adds `.context()` / `.with_context()` to any
//! result whose error converts into [`Error`]:
//!
//! ```no_run
//! use autoanalyst::error::ResultExt as _;
//!
//! fn read_notes() -> autoanalyst::error::Result<String> {
//!     let content = std::fs::read_to_string("notes.txt").context("Failed to read notes")?;
//!     Ok(content)
//! }
//! ```

use std::fmt;

/// Main error type for AutoAnalyst operations.
#[derive(Debug)]
pub enum Error {
    /// I/O errors (file operations, etc.)
    Io(std::io::Error),

    /// Dataset cannot be parsed or read
    Input(String),

    /// Analysis failures; defensive guards only, a structurally valid
    /// table never produces one
    Analysis(String),

    /// Model-service failures (auth, network, quota, malformed response),
    /// carrying the underlying message
    Generation(String),

    /// Missing or invalid configuration, detected before any model call
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Input(msg) => write!(f, "Input error: {msg}"),
            Self::Analysis(msg) => write!(f, "Analysis error: {msg}"),
            Self::Generation(msg) => write!(f, "Report generation failed: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Analysis(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Self::Generation(err.to_string())
    }
}

/// Result type alias for AutoAnalyst operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: Error = e.into();
            Error::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: Error = e.into();
            Error::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Generation("rate limit exceeded".to_owned());
        assert_eq!(err.to_string(), "Report generation failed: rate limit exceeded");

        let err = Error::Input("unsupported file extension: 'pdf'".to_owned());
        assert_eq!(err.to_string(), "Input error: unsupported file extension: 'pdf'");
    }

    #[test]
    fn test_openai_error_becomes_generation() {
        let err: Error = async_openai::error::OpenAIError::InvalidArgument("bad key".to_owned()).into();
        assert!(matches!(err, Error::Generation(_)));
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "data.csv",
        ));

        let result: Result<()> = result.context("Failed to read dataset");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read dataset")
        );
    }
}
