//! html2ebook Core Library
//!
//! This crate provides the data model and packaging logic for html2ebook:
//! classify the files of an input directory, ingest HTML pages (extracting
//! their titles) and raw assets, optionally reorder the pages, and encode
//! everything into a single EPUB container.

pub mod classify;
pub mod encoder;
pub mod error;
pub mod ingest;
pub mod sort;
pub mod types;

pub use classify::{classify, FileKind, MimeRegistry};
pub use error::{Html2EbookError, PackageError, ParseError, Result};
pub use types::{Asset, Book, Cover, Metadata, Page, TocEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new(Metadata::new("html2ebook"));
        assert_eq!(book.metadata.identifier, "html2ebook");
        assert!(book.spine().is_empty());
    }
}
