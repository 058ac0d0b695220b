//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;

use mdframe::FrameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot export a table with no variables")]
    EmptyOutput,

    #[error("Variable {variable} references dimension {dimension}, which is not in the frame")]
    StructuralInconsistency { variable: String, dimension: String },

    #[error("Value lookup failed: {0}")]
    Lookup(#[from] FrameError),
}
