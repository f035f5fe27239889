//! html2ebook CLI - package a directory of HTML pages and assets into an EPUB

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "html2ebook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input directory containing HTML pages and assets
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path [default: <input>/<title>.epub]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Index page file name, placed first in the reading order
    #[arg(long, default_value = "index.html")]
    pub index: String,

    /// Book identifier
    #[arg(long, default_value = "html2ebook")]
    pub identifier: String,

    /// Book title [default: the title of the index page]
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Cover image path
    #[arg(long)]
    pub cover: Option<PathBuf>,

    /// Sort pages by file name: non-numeric names first (lexicographic),
    /// numeric names after (ascending by value)
    #[arg(long)]
    pub sort: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "html2ebook_cli=debug"
    } else {
        "html2ebook_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::build(&cli)
}
