//! Deserializable representation of `catalog.json`.
//!
//! The types mirror the catalog schema so the binaries can reason about
//! entries without ad-hoc JSON handling. Every field defaults when absent:
//! syntactic loading must succeed on shape-invalid catalogs, and the table
//! renderer degrades missing values to empty cells instead of failing.

use crate::catalog::{ServerId, ServerStatus};
use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
/// Full server catalog as stored on disk.
pub struct Catalog {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub servers: Vec<Server>,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// One catalog entry describing a single cataloged service.
pub struct Server {
    #[serde(default)]
    pub id: ServerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agency: String,
    #[serde(default)]
    pub dataset: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<ServerStatus>,
}

impl Server {
    /// Absent status means active.
    pub fn is_active(&self) -> bool {
        matches!(self.status, None | Some(ServerStatus::Active))
    }
}

impl Catalog {
    /// Collect ids that appear more than once, each reported exactly once
    /// regardless of how often it repeats, in first-duplicate order.
    ///
    /// Runs after schema validation so entries are assumed well shaped; an
    /// empty result means the uniqueness invariant holds.
    pub fn duplicate_ids(&self) -> Vec<ServerId> {
        let mut seen: BTreeSet<&ServerId> = BTreeSet::new();
        let mut reported: BTreeSet<&ServerId> = BTreeSet::new();
        let mut duplicates = Vec::new();
        for server in &self.servers {
            if !seen.insert(&server.id) && reported.insert(&server.id) {
                duplicates.push(server.id.clone());
            }
        }
        duplicates
    }
}

/// Read and parse a server catalog from disk without shape validation.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
