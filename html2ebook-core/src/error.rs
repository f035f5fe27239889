//! Error types for html2ebook-core

use thiserror::Error;

/// Result type alias using Html2EbookError
pub type Result<T> = std::result::Result<T, Html2EbookError>;

/// Top-level error type for all html2ebook operations
#[derive(Debug, Error)]
pub enum Html2EbookError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while ingesting HTML pages
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no <title> element in {file}")]
    MissingTitle { file: String },
}

/// Errors that occur during container assembly
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("book has no index page")]
    MissingIndex,

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
