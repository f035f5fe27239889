//! Core types for the book being assembled

mod asset;
mod book;
mod metadata;
mod page;
mod toc;

pub use asset::Asset;
pub use book::Book;
pub use metadata::{Cover, Metadata};
pub use page::Page;
pub use toc::TocEntry;
