//! Regenerate the README's server table from the catalog.
//!
//! Usage:
//!   generate-readme
//!   generate-readme --catalog ./catalog.json --readme ./README.md
//!
//! Renders the catalog as a markdown table and splices it between the
//! generated-table markers. The README is only written after the patch
//! succeeds, so a document missing a marker is left untouched on disk.

use anyhow::{Context, Result};
use clap::Parser;
use server_catalog::{DEFAULT_CATALOG_PATH, load_catalog_from_path, patch_document, render_table};
use std::fs;
use std::path::PathBuf;

const DEFAULT_README_PATH: &str = "./README.md";

#[derive(Parser, Debug)]
#[command(name = "generate-readme")]
#[command(about = "Regenerate the catalog table embedded in the README")]
struct Cli {
    /// Catalog file to render.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// Document carrying the generated-table markers.
    #[arg(long, default_value = DEFAULT_README_PATH)]
    readme: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("Generating README table...");

    let catalog = load_catalog_from_path(&cli.catalog)?;
    let table = render_table(&catalog.servers);

    let document = fs::read_to_string(&cli.readme)
        .with_context(|| format!("reading {}", cli.readme.display()))?;
    let updated = patch_document(&document, &table)?;
    fs::write(&cli.readme, updated)
        .with_context(|| format!("writing {}", cli.readme.display()))?;

    println!("Generated table with {} servers", catalog.servers.len());
    Ok(())
}
