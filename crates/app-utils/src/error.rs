//! Error types for app-utils

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Main errors for the `app-utils` crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Well-formed XML that is not a valid NoDL description
    #[error("Invalid NoDL description: {0}")]
    InvalidNodl(String),

    /// NoDL interface version other than the supported one
    #[error("Unsupported NoDL interface version: {found} (expected {expected})")]
    UnsupportedInterfaceVersion {
        /// Version found in the document
        found: String,
        /// Supported version
        expected: &'static str,
    },

    /// Well-formed XML that is not a valid policy document
    #[error("Invalid policy document: {0}")]
    InvalidPolicy(String),

    /// Policy format version other than the supported one
    #[error("Unsupported policy version: {found} (expected {expected})")]
    UnsupportedPolicyVersion {
        /// Version found in the document
        found: String,
        /// Supported version
        expected: &'static str,
    },

    /// Output path without the policy file extension
    #[error("Policy file must end with '{extension}': {}", .path.display())]
    InvalidPolicyPath {
        /// Rejected path
        path: PathBuf,
        /// Required extension
        extension: &'static str,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xml(err: impl Display) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
