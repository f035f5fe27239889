//! Ingestors: turn files on disk into Page and Asset entries

use crate::classify::MimeRegistry;
use crate::error::{ParseError, Result};
use crate::types::{Asset, Cover, Page};
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

/// Read an HTML file and register it as a page entry under `rel_name`.
///
/// The display title is the trimmed text of the first `<title>` element under
/// `<head>`. A page without a title element fails the whole run; the tool
/// assumes a well-formed input directory.
pub fn read_page(path: &Path, rel_name: &str) -> Result<Page> {
    let content = fs::read_to_string(path)?;
    let title = extract_title(&content).ok_or_else(|| ParseError::MissingTitle {
        file: path.display().to_string(),
    })?;
    Ok(Page::new(rel_name, title, content))
}

/// Read any non-HTML file and register it as an asset entry under `rel_name`,
/// verbatim, no validation.
pub fn read_asset(path: &Path, rel_name: &str, mime_type: &str) -> Result<Asset> {
    let data = fs::read(path)?;
    Ok(Asset::new(rel_name, mime_type, data))
}

/// Read a cover image, registered under its base file name with the MIME
/// type resolved via the extension registry.
pub fn read_cover(path: &Path, registry: &MimeRegistry) -> Result<Cover> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cover path has no file name: {}", path.display()),
            )
        })?;
    let mime_type = registry.guess(&file_name).unwrap_or_default().to_string();
    let data = fs::read(path)?;
    Ok(Cover {
        file_name,
        mime_type,
        data,
    })
}

/// Extract the trimmed text of the first `head > title` element.
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("head > title").unwrap();
    let element = document.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Html2EbookError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_page_extracts_trimmed_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(
            &path,
            "<html><head><title>  My Book \n</title></head><body><p>hi</p></body></html>",
        )
        .unwrap();

        let page = read_page(&path, "page.html").unwrap();
        assert_eq!(page.title, "My Book");
        assert_eq!(page.file_name, "page.html");
        assert!(page.content.contains("<p>hi</p>"));
    }

    #[test]
    fn test_read_page_without_title_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html><head></head><body>no title</body></html>").unwrap();

        let err = read_page(&path, "page.html").unwrap_err();
        assert!(matches!(
            err,
            Html2EbookError::Parse(ParseError::MissingTitle { .. })
        ));
    }

    #[test]
    fn test_read_asset_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("img.png");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let asset = read_asset(&path, "images/img.png", "image/png").unwrap();
        assert_eq!(asset.file_name, "images/img.png");
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.data, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn test_read_cover_uses_base_name_and_registry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("art").join("cover.webp");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [1, 2, 3]).unwrap();

        let cover = read_cover(&path, &MimeRegistry::new()).unwrap();
        assert_eq!(cover.file_name, "cover.webp");
        assert_eq!(cover.mime_type, "image/webp");
        assert_eq!(cover.data, vec![1, 2, 3]);
    }
}
