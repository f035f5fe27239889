//! Encoders for serializing an assembled book to an output container

mod epub;

pub use epub::EpubEncoder;

use crate::error::PackageError;
use crate::types::Book;
use std::io::Write;

/// Narrow interface over the packaging format, so the container format is
/// swappable without touching the walker, classifier, or sort logic.
pub trait Encoder: Send + Sync {
    /// Encode a book to a writer
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), PackageError>;

    /// Format name (e.g., "EPUB")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;
}
