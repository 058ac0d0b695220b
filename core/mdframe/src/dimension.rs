//! FILENAME: core/mdframe/src/dimension.rs
//! PURPOSE: A named axis of a multi-dimensional frame.

use serde::{Deserialize, Serialize};

/// A named axis with a fixed extent. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub size: usize,
}

impl Dimension {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Dimension {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
