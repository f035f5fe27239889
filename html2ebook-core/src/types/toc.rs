//! Table of contents types

use serde::{Deserialize, Serialize};

/// A single entry in the table of contents
///
/// The TOC is a flat list mirroring the spine: one entry per page, pairing
/// the page's file name with its display title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Display title
    pub title: String,

    /// Target file name within the book
    pub href: String,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}
