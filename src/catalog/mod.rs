//! Server catalog wiring.
//!
//! This module wraps the server catalog on disk (`catalog.json`) so the
//! binaries can load a parsed snapshot and share one set of entry types.
//! Types here mirror the schema fields; shape enforcement lives in
//! `crate::schema` and the duplicate-id check on `Catalog`.

pub mod identity;
pub mod model;

pub use identity::{ServerId, ServerStatus};
pub use model::{Catalog, Server, load_catalog_from_path};

/// Default relative path to the catalog consumed by both utilities.
pub const DEFAULT_CATALOG_PATH: &str = "./catalog.json";

/// Default relative path to the JSON Schema describing the catalog shape.
pub const DEFAULT_SCHEMA_PATH: &str = "./schema/catalog.schema.json";
