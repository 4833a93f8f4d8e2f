//! Error types for document scanning.

use thiserror::Error;

/// Errors that can occur while parsing or classifying one input document.
///
/// Every variant is fatal for the document that produced it, and for that
/// document only; sibling inputs keep being processed.
#[derive(Debug, Error)]
pub enum ScanError {
    /// XML parsing error from the underlying reader.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Attribute present but carrying an unrecognized value.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl ScanError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "attribute",
            message: message.into(),
        }
    }
}
