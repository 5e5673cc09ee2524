//! Error taxonomy shared by the catalog utilities.
//!
//! Every variant is terminal for the invocation: binaries format the error
//! and exit non-zero. Violation and duplicate sets are collected in full
//! before surfacing so one run reports everything it found.

use crate::catalog::ServerId;
use crate::schema::SchemaViolation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema validation failed ({} violations):\n{}", .violations.len(), format_violations(.violations))]
    Schema { violations: Vec<SchemaViolation> },
    #[error("duplicate server ids found: {}", format_ids(.ids))]
    DuplicateIds { ids: Vec<ServerId> },
    #[error("document is missing marker '{marker}'")]
    MissingMarker { marker: &'static str },
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_ids(ids: &[ServerId]) -> String {
    ids.iter()
        .map(|id| id.0.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
