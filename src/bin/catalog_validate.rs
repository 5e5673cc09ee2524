//! Validate the server catalog against its JSON Schema.
//!
//! Usage:
//!   catalog-validate
//!   catalog-validate --catalog ./catalog.json --schema ./schema/catalog.schema.json
//!
//! Schema violations are collected exhaustively before reporting; the
//! duplicate-id check only runs once the catalog is shape-valid. Exit code
//! is zero only when both checks pass.

use anyhow::{Context, Result};
use clap::Parser;
use server_catalog::{
    Catalog, CatalogError, CompiledSchema, DEFAULT_CATALOG_PATH, DEFAULT_SCHEMA_PATH,
    read_json_file,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate the server catalog against its schema and check for duplicate ids")]
struct Cli {
    /// Catalog file to validate.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// JSON Schema describing the accepted catalog shape.
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("Validating catalog...");

    let catalog_value = read_json_file(&cli.catalog)?;
    let schema = CompiledSchema::load(&cli.schema)?;
    schema.ensure_valid(&catalog_value)?;
    println!("Schema validation passed");

    let catalog: Catalog = serde_json::from_value(catalog_value)
        .with_context(|| format!("decoding catalog {}", cli.catalog.display()))?;
    let duplicates = catalog.duplicate_ids();
    if !duplicates.is_empty() {
        return Err(CatalogError::DuplicateIds { ids: duplicates }.into());
    }
    println!("No duplicate IDs");

    println!("Catalog is valid ({} servers)", catalog.servers.len());
    Ok(())
}
