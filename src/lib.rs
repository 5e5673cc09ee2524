//! Server catalog tooling.
//!
//! A small JSON catalog of server entries plus two batch utilities built on
//! it: `catalog-validate` checks the catalog against its declared JSON
//! Schema and for duplicate entry ids; `generate-readme` regenerates the
//! markdown table embedded between markers in the README. Each invocation
//! reads the catalog fresh, transforms it, and exits; there is no shared
//! state between runs.

pub mod catalog;
pub mod error;
pub mod patch;
pub mod render;
pub mod schema;

pub use catalog::{
    Catalog, DEFAULT_CATALOG_PATH, DEFAULT_SCHEMA_PATH, Server, ServerId, ServerStatus,
    load_catalog_from_path,
};
pub use error::CatalogError;
pub use patch::{END_MARKER, START_MARKER, patch_document};
pub use render::render_table;
pub use schema::{CompiledSchema, SchemaViolation};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a file and parse it as JSON, without shape validation.
///
/// Failures carry the source path so diagnostics name the offending file.
pub fn read_json_file(path: &Path) -> Result<Value, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
