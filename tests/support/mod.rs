// Shared fixture helpers for the CLI integration tests.

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path to the schema bundled with the crate.
pub fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/catalog.schema.json")
}

pub fn validate_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_catalog-validate"))
}

pub fn generate_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-readme"))
}

/// A schema-valid server entry; tests mutate fields to provoke violations.
pub fn valid_server(id: &str, agency: &str, dataset: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{dataset} Server"),
        "agency": agency,
        "dataset": dataset,
        "description": format!("{dataset} data from {agency}."),
        "repository": format!("https://github.com/server-catalog/{id}-server")
    })
}

pub fn write_catalog(dir: &Path, servers: Vec<Value>) -> PathBuf {
    let path = dir.join("catalog.json");
    let catalog = json!({"version": "1.0.0", "servers": servers});
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
    path
}

pub fn write_readme(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("README.md");
    fs::write(&path, contents).unwrap();
    path
}

pub fn marker_document() -> String {
    "# Fixture\n\nIntro.\n\n<!-- BEGIN GENERATED TABLE -->\nstale table\n<!-- END GENERATED TABLE -->\n\nOutro.\n"
        .to_string()
}
