//! Error types for parsing and writing.
//!
//! All parse failures are reported through [`Result`]; the engine never
//! panics on malformed input. A failed parse is not recoverable
//! mid-document: the parser stops at the first error and no partial tree
//! is returned.
//!
//! ## Error Categories
//!
//! - [`Error::InvalidValue`]: a malformed literal, array, or object body
//! - [`Error::InvalidName`]: a malformed member name or escape sequence
//! - [`Error::Io`]: a sink failure while writing
//!
//! Parse errors carry the line and column of the offending byte.
//!
//! ## Examples
//!
//! ```rust
//! use confit::{parse, Error};
//!
//! let result = parse("{\"a\": }");
//! match result {
//!     Err(Error::InvalidValue { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected an invalid-value error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing or writing.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A malformed literal, array body, or object body.
    #[error("invalid value at line {line}, column {col}: {msg}")]
    InvalidValue {
        line: usize,
        col: usize,
        msg: String,
    },

    /// A malformed member name or escape sequence inside one.
    #[error("invalid name at line {line}, column {col}: {msg}")]
    InvalidName {
        line: usize,
        col: usize,
        msg: String,
    },

    /// IO error while writing to a sink.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-value error at a source position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confit::Error;
    ///
    /// let err = Error::invalid_value(3, 7, "expected a value");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn invalid_value(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidValue {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid-name error at a source position.
    pub fn invalid_name(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidName {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn message<T: std::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Returns `true` if this is a parse error (as opposed to an IO or
    /// generic error).
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidValue { .. } | Error::InvalidName { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
