//! XML error types

use thiserror::Error;

/// Result type for XML reading
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while reading a document
#[derive(Debug, Error)]
pub enum XmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Closing tag does not match the open element
    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedTag { expected: String, found: String },

    /// Document ended with open elements
    #[error("Unexpected end of document inside <{0}>")]
    UnclosedElement(String),

    /// Document has no root element
    #[error("Document has no root element")]
    NoRoot,
}
