//! Build command: walk the input directory and assemble the book

use crate::Cli;
use anyhow::{bail, Context, Result};
use html2ebook_core::encoder::{Encoder, EpubEncoder};
use html2ebook_core::{classify, ingest, Book, FileKind, Metadata, MimeRegistry};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::time::Duration;

/// Walk the input directory, ingest every file, and write the packaged book
pub fn build(cli: &Cli) -> Result<()> {
    let registry = MimeRegistry::new();

    let mut metadata = Metadata::new(&cli.identifier);
    metadata.title = cli.title.clone();
    metadata.author = cli.author.clone();

    if let Some(cover) = &cli.cover {
        metadata.cover = Some(
            ingest::read_cover(cover, &registry)
                .with_context(|| format!("Failed to read cover image: {}", cover.display()))?,
        );
    }

    let mut book = Book::new(metadata);

    // Single sequential pass over the input tree; traversal order is
    // filesystem-dependent and duplicates are last-write-wins.
    for entry in walkdir::WalkDir::new(&cli.input) {
        let entry = entry
            .with_context(|| format!("Failed to walk input directory: {}", cli.input.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_name = entry
            .path()
            .strip_prefix(&cli.input)
            .context("Walked file outside the input directory")?
            .to_string_lossy()
            .replace('\\', "/");
        let file_name = entry.file_name().to_string_lossy();

        match classify(&file_name, &cli.index, &registry) {
            // First index match wins; later files with the index name are
            // ingested as ordinary pages.
            FileKind::Index if book.index.is_none() => {
                let page = ingest::read_page(entry.path(), &rel_name)?;
                tracing::debug!("index page: {} ({})", rel_name, page.title);
                book.set_index(page);
            }
            FileKind::Index | FileKind::Page => {
                book.add_page(ingest::read_page(entry.path(), &rel_name)?);
            }
            FileKind::Stylesheet => {
                book.add_asset(ingest::read_asset(entry.path(), &rel_name, "text/css")?);
            }
            FileKind::Asset { mime } => {
                book.add_asset(ingest::read_asset(
                    entry.path(),
                    &rel_name,
                    mime.as_deref().unwrap_or_default(),
                )?);
            }
        }

        println!("Added {}", rel_name);
    }

    if book.index.is_none() {
        bail!(
            "no index page '{}' found under {}",
            cli.index,
            cli.input.display()
        );
    }

    if cli.sort {
        book.sort_pages();
    }

    tracing::info!(
        "Collected {} pages and {} assets from {}",
        book.spine().len(),
        book.assets.len(),
        cli.input.display()
    );

    let title = book
        .title()
        .unwrap_or_default()
        .to_string();

    let encoder = EpubEncoder::new();
    let output = cli.output.clone().unwrap_or_else(|| {
        cli.input
            .join(format!("{}.{}", title, encoder.file_extension()))
    });

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Encoding to {}...", encoder.format_name()));

    let mut output_file = File::create(&output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    encoder
        .encode(&book, &mut output_file)
        .with_context(|| format!("Failed to encode {}", encoder.format_name()))?;

    pb.finish_with_message(format!("Wrote '{}' -> {}", title, output.display()));

    Ok(())
}
