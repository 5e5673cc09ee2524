//! Marker-delimited document splicing.
//!
//! The README carries two literal sentinel lines bounding the generated
//! region. Patching replaces only what lies strictly between the first
//! occurrence of each marker, keeps the markers in place, and is textually
//! idempotent so repeated runs leave the document byte-identical.

use crate::error::CatalogError;

pub const START_MARKER: &str = "<!-- BEGIN GENERATED TABLE -->";
pub const END_MARKER: &str = "<!-- END GENERATED TABLE -->";

/// Splice `table` between the markers of `document`, returning the full
/// reconstructed text. The caller persists the result.
pub fn patch_document(document: &str, table: &str) -> Result<String, CatalogError> {
    let start = document
        .find(START_MARKER)
        .ok_or(CatalogError::MissingMarker {
            marker: START_MARKER,
        })?;
    let end = document
        .find(END_MARKER)
        .ok_or(CatalogError::MissingMarker { marker: END_MARKER })?;

    let before = &document[..start + START_MARKER.len()];
    let after = &document[end + END_MARKER.len()..];
    Ok(format!("{before}\n{table}\n{END_MARKER}{after}"))
}
