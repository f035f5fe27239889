//! File classification and MIME type resolution
//!
//! Every file found under the input directory is classified by its bare file
//! name: the configured index page, an HTML page, a stylesheet, or a generic
//! asset whose MIME type is resolved against the extension registry.

use std::collections::HashMap;

/// Extension to MIME type mappings for the common web asset types.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("css", "text/css"),
    ("flac", "audio/flac"),
    ("gif", "image/gif"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/ogg"),
    ("otf", "font/otf"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
    ("wav", "audio/wav"),
    ("webm", "video/webm"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("xhtml", "application/xhtml+xml"),
    ("xml", "application/xml"),
];

/// Read-only extension to MIME type lookup table, constructed once at startup
/// and passed explicitly to the classifier.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    types: HashMap<String, String>,
}

impl MimeRegistry {
    /// Build the registry from the standard table plus the custom entries
    /// for webp images and m4a audio.
    pub fn new() -> Self {
        let mut types: HashMap<String, String> = DEFAULT_TYPES
            .iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();
        types.insert("webp".to_string(), "image/webp".to_string());
        types.insert("m4a".to_string(), "audio/m4a".to_string());
        Self { types }
    }

    /// Resolve the MIME type for a file name by its extension.
    /// Returns `None` when no mapping exists; callers pass the unknown value
    /// through as an empty string, no error raised.
    pub fn guess(&self, file_name: &str) -> Option<&str> {
        let (_, ext) = file_name.rsplit_once('.')?;
        self.types.get(&ext.to_ascii_lowercase()).map(String::as_str)
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Verdict for a single file found during the directory walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// The configured index page
    Index,

    /// A regular HTML page
    Page,

    /// A stylesheet, always `text/css` regardless of the registry contents
    Stylesheet,

    /// Any other file, with the MIME type resolved via the registry
    Asset { mime: Option<String> },
}

/// Classify a file by its bare file name (no directory components).
pub fn classify(file_name: &str, index_name: &str, registry: &MimeRegistry) -> FileKind {
    if file_name == index_name {
        FileKind::Index
    } else if file_name.ends_with(".html") {
        FileKind::Page
    } else if file_name.ends_with(".css") {
        FileKind::Stylesheet
    } else {
        FileKind::Asset {
            mime: registry.guess(file_name).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_matches_configured_name() {
        let registry = MimeRegistry::new();
        assert_eq!(classify("index.html", "index.html", &registry), FileKind::Index);
        assert_eq!(classify("start.html", "start.html", &registry), FileKind::Index);
        assert_eq!(classify("index.html", "start.html", &registry), FileKind::Page);
    }

    #[test]
    fn test_html_and_css() {
        let registry = MimeRegistry::new();
        assert_eq!(classify("chapter.html", "index.html", &registry), FileKind::Page);
        assert_eq!(
            classify("style.css", "index.html", &registry),
            FileKind::Stylesheet
        );
    }

    #[test]
    fn test_custom_mime_entries() {
        let registry = MimeRegistry::new();
        assert_eq!(registry.guess("cover.webp"), Some("image/webp"));
        assert_eq!(registry.guess("track.m4a"), Some("audio/m4a"));
    }

    #[test]
    fn test_standard_mime_entries() {
        let registry = MimeRegistry::new();
        assert_eq!(registry.guess("photo.JPG"), Some("image/jpeg"));
        assert_eq!(registry.guess("icon.png"), Some("image/png"));
    }

    #[test]
    fn test_unknown_extension_passes_through() {
        let registry = MimeRegistry::new();
        assert_eq!(registry.guess("data.xyzzy"), None);
        assert_eq!(registry.guess("no_extension"), None);
        assert_eq!(
            classify("data.xyzzy", "index.html", &registry),
            FileKind::Asset { mime: None }
        );
    }
}
