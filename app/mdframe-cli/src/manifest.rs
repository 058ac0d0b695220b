//! FILENAME: app/mdframe-cli/src/manifest.rs
//! PURPOSE: JSON description of a frame, as read from disk by the CLI.
//!
//! ```json
//! {
//!   "dimensions": [{ "name": "time", "size": 2 }],
//!   "variables": [
//!     { "name": "flow", "dimensions": ["time"], "data": { "type": "float", "values": [0.5, 0.7] } }
//!   ],
//!   "options": { "includeHeader": true }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use mdframe::{Dimension, Frame, FrameError, VariableData};
use persistence::ExportOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameManifest {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
    #[serde(default)]
    pub options: Option<ExportOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    /// Local dimension order. Empty for a scalar variable.
    #[serde(default)]
    pub dimensions: Vec<String>,
    pub data: VariableData,
}

impl FrameManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid frame manifest")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Builds the frame, dimensions first so variables can refer to them.
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut frame = Frame::new();
        for dim in &self.dimensions {
            frame.add_dimension(&dim.name, dim.size)?;
        }
        for var in &self.variables {
            let dims: Vec<&str> = var.dimensions.iter().map(String::as_str).collect();
            frame.add_variable(&var.name, &dims, var.data.clone())?;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdframe::Scalar;

    const SAMPLE: &str = r#"{
        "dimensions": [{ "name": "a", "size": 2 }, { "name": "b", "size": 3 }],
        "variables": [
            { "name": "v1", "dimensions": ["a"], "data": { "type": "int", "values": [10, 20] } },
            { "name": "v2", "dimensions": ["b", "a"], "data": { "type": "float", "values": [0, 1, 2, 3, 4, 5] } },
            { "name": "k", "data": { "type": "text", "values": ["const"] } }
        ],
        "options": { "includeHeader": false }
    }"#;

    #[test]
    fn test_parse_and_build() {
        let manifest = FrameManifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.options, Some(ExportOptions::new(false)));

        let frame = manifest.to_frame().unwrap();
        assert_eq!(frame.dimension_count(), 2);
        assert_eq!(frame.variable_count(), 3);
        assert_eq!(frame.variable("v2").unwrap().at(&[2, 1]).unwrap(), Scalar::Float(5.0));
        assert_eq!(frame.variable("k").unwrap().rank(), 0);
    }

    #[test]
    fn test_unknown_dimension_surfaces() {
        let json = r#"{
            "variables": [
                { "name": "v", "dimensions": ["nope"], "data": { "type": "int", "values": [1] } }
            ]
        }"#;
        let manifest = FrameManifest::from_json(json).unwrap();
        assert!(matches!(
            manifest.to_frame(),
            Err(FrameError::UnknownDimension { .. })
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(FrameManifest::from_json("{ \"dimensions\": 3 }").is_err());
    }
}
