//! Book metadata types

use serde::{Deserialize, Serialize};

/// Book-level metadata collected from command-line options and the index page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Book identifier (dc:identifier)
    pub identifier: String,

    /// Explicit book title; when absent the index page title is used
    pub title: Option<String>,

    /// Author name; absent means no author is recorded
    pub author: Option<String>,

    /// Cover image; absent means no cover is recorded
    pub cover: Option<Cover>,
}

impl Metadata {
    /// Create new metadata with the given identifier
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            author: None,
            cover: None,
        }
    }

    /// Set an explicit title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Cover image registered under its base file name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cover {
    /// Base file name of the cover image (no directory components)
    pub file_name: String,

    /// MIME type resolved via the extension registry (may be empty)
    pub mime_type: String,

    /// Raw image bytes
    #[serde(with = "super::asset::base64_serde")]
    pub data: Vec<u8>,
}
