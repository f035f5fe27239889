//! EPUB encoder implementation

use crate::error::PackageError;
use crate::types::Book;
use std::io::Write;

/// Encoder for the EPUB container format, backed by epub-builder.
///
/// Contents are added in spine order (index page first); epub-builder derives
/// the navigation document and NCX from the content titles, so the generated
/// TOC mirrors the spine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpubEncoder;

impl EpubEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl super::Encoder for EpubEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), PackageError> {
        use epub_builder::{EpubBuilder, EpubContent, ReferenceType, ZipLibrary};

        if book.index.is_none() {
            return Err(PackageError::MissingIndex);
        }

        let mut builder = EpubBuilder::new(ZipLibrary::new().map_err(|e| {
            PackageError::EncodingFailed(format!("Failed to create zip: {}", e))
        })?)
        .map_err(|e| {
            PackageError::EncodingFailed(format!("Failed to create EPUB builder: {}", e))
        })?;

        // Set metadata. The dc:identifier is stored as a UUID, so a
        // non-UUID identifier string maps to a stable name-based UUID.
        let identifier = &book.metadata.identifier;
        let uuid = uuid::Uuid::parse_str(identifier).unwrap_or_else(|_| {
            uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, identifier.as_bytes())
        });
        builder.set_uuid(uuid);

        if let Some(title) = book.title() {
            builder
                .metadata("title", title)
                .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;
        }

        if let Some(author) = &book.metadata.author {
            builder
                .metadata("author", author)
                .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;
        }

        if let Some(cover) = &book.metadata.cover {
            builder
                .add_cover_image(&cover.file_name, cover.data.as_slice(), &cover.mime_type)
                .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;
        }

        // Add assets (stylesheets, images, audio)
        for asset in &book.assets {
            builder
                .add_resource(&asset.file_name, asset.data.as_slice(), &asset.mime_type)
                .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;
        }

        // Add pages in spine order, titled from the table of contents.
        // Navigation is delegated to epub-builder: the generated nav and NCX
        // take their titles from the TOC and their targets from the actual
        // content locations.
        for (page, entry) in book.spine().into_iter().zip(book.toc()) {
            builder
                .add_content(
                    EpubContent::new(&page.file_name, page.content.as_bytes())
                        .title(&entry.title)
                        .reftype(ReferenceType::Text),
                )
                .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;
        }

        // Generate EPUB (epub-builder also emits the nav document and NCX
        // structural entries the container format requires)
        builder
            .generate(writer)
            .map_err(|e| PackageError::EncodingFailed(e.to_string()))?;

        Ok(())
    }

    fn format_name(&self) -> &str {
        "EPUB"
    }

    fn file_extension(&self) -> &str {
        "epub"
    }
}
