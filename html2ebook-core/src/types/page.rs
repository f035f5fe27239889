//! Page entry type: one HTML file of the book

use serde::{Deserialize, Serialize};

/// A single HTML page registered in the book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Path relative to the input root, separators normalized to `/`
    pub file_name: String,

    /// Display title extracted from the page's `<title>` element
    pub title: String,

    /// Raw HTML content, registered verbatim
    pub content: String,
}

impl Page {
    /// Create a new page entry
    pub fn new(
        file_name: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
