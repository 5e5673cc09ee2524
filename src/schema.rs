//! JSON Schema compilation and exhaustive violation collection.
//!
//! The schema is supplied externally and treated as opaque: it is parsed,
//! compiled once, and every violation in the instance is collected in a
//! single pass rather than stopping at the first mismatch.

use crate::error::CatalogError;
use anyhow::{Context, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// One mismatch between the catalog and its declared shape rules.
#[derive(Clone, Debug)]
pub struct SchemaViolation {
    /// Instance pointer where the violation occurred; `(root)` at top level.
    pub path: String,
    /// Human-readable description of the violated rule.
    pub message: String,
    /// Structured parameters of the rule (allowed enum values, expected
    /// type, and so on); empty when the rule carries none.
    pub detail: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if !self.detail.is_empty() {
            write!(f, " [{}]", self.detail)?;
        }
        Ok(())
    }
}

/// Compiled schema plus the raw document backing it.
pub struct CompiledSchema {
    compiled: JSONSchema,
    // Keeps the schema document alive for the compiled validator's lifetime.
    _raw: Arc<Value>,
}

impl CompiledSchema {
    /// Parse and compile a JSON Schema from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let schema_value = crate::read_json_file(path)?;
        Self::from_value(schema_value)
            .with_context(|| format!("compiling schema {}", path.display()))
    }

    /// Compile an already-parsed schema document.
    pub fn from_value(schema_value: Value) -> Result<Self> {
        let raw = Arc::new(schema_value);
        let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
        let compiled = JSONSchema::compile(raw_static).context("compiling JSON Schema")?;
        Ok(Self {
            compiled,
            _raw: raw,
        })
    }

    /// Check an instance, accumulating all violations in one pass.
    ///
    /// An empty result means the instance conforms; callers must not run
    /// shape-assuming checks when the result is non-empty.
    pub fn violations(&self, instance: &Value) -> Vec<SchemaViolation> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    SchemaViolation {
                        path: if pointer.is_empty() {
                            "(root)".to_string()
                        } else {
                            pointer
                        },
                        message: err.to_string(),
                        detail: format!("{:?}", err.kind),
                    }
                })
                .collect(),
        }
    }

    /// Check an instance, surfacing the full violation set as an error.
    pub fn ensure_valid(&self, instance: &Value) -> Result<(), CatalogError> {
        let violations = self.violations(instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Schema { violations })
        }
    }
}
