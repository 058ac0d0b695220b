//! FILENAME: core/persistence/src/options.rs
//! PURPOSE: Caller-facing knobs for a table export.

use serde::{Deserialize, Serialize};

/// Options for `export_table_with` / `write_table`.
/// Serialized with camelCase keys, e.g. `{"includeHeader": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Write the variable names as the first line.
    pub include_header: bool,
}

impl ExportOptions {
    pub fn new(include_header: bool) -> Self {
        Self { include_header }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}
