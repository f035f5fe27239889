//! The main Book type - everything collected from the input directory

use super::{Asset, Metadata, Page, TocEntry};
use serde::{Deserialize, Serialize};

/// The complete book: metadata plus every page and asset found in the
/// input directory.
///
/// The spine (linear reading order) is always the index page followed by the
/// remaining pages in their stored order; the sort step only reorders
/// `pages`, it never creates or destroys entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book metadata (identifier, title, author, cover)
    pub metadata: Metadata,

    /// The designated landing page, always first in the spine
    pub index: Option<Page>,

    /// All other HTML pages, in discovery order until sorted
    pub pages: Vec<Page>,

    /// All non-HTML files
    pub assets: Vec<Asset>,
}

impl Book {
    /// Create an empty book with the given metadata
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            index: None,
            pages: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Register the index page. The first page claimed as index wins;
    /// later candidates are ignored.
    pub fn set_index(&mut self, page: Page) {
        if self.index.is_none() {
            self.index = Some(page);
        }
    }

    /// Add a page entry. A page with the same relative file name replaces
    /// the earlier one in place (last write wins).
    pub fn add_page(&mut self, page: Page) {
        if let Some(existing) = self.pages.iter_mut().find(|p| p.file_name == page.file_name) {
            *existing = page;
        } else {
            self.pages.push(page);
        }
    }

    /// Add an asset entry. A duplicate relative file name replaces the
    /// earlier entry in place (last write wins).
    pub fn add_asset(&mut self, asset: Asset) {
        if let Some(existing) = self
            .assets
            .iter_mut()
            .find(|a| a.file_name == asset.file_name)
        {
            *existing = asset;
        } else {
            self.assets.push(asset);
        }
    }

    /// The linear reading order: index page first, then the remaining pages.
    pub fn spine(&self) -> Vec<&Page> {
        self.index.iter().chain(self.pages.iter()).collect()
    }

    /// The table of contents, mirroring the spine; the encoder takes its
    /// navigation titles from here. The index entry always pairs with the
    /// literal file name `index.html`, whatever the index page's actual
    /// relative path is; the emitted navigation targets the content where
    /// it actually lives.
    pub fn toc(&self) -> Vec<TocEntry> {
        let mut toc = Vec::with_capacity(self.pages.len() + 1);
        if let Some(index) = &self.index {
            toc.push(TocEntry::new(&index.title, "index.html"));
        }
        for page in &self.pages {
            toc.push(TocEntry::new(&page.title, &page.file_name));
        }
        toc
    }

    /// The resolved book title: the explicit metadata title when configured,
    /// otherwise the index page title.
    pub fn title(&self) -> Option<&str> {
        self.metadata
            .title
            .as_deref()
            .or_else(|| self.index.as_ref().map(|p| p.title.as_str()))
    }

    /// Reorder pages: non-numeric names first (lexicographic), numeric names
    /// after (ascending integer order). The index page is unaffected.
    pub fn sort_pages(&mut self) {
        crate::sort::sort_pages(&mut self.pages);
    }
}
