//! FILENAME: core/mdframe/src/variable.rs
//! PURPOSE: A named, typed array indexed over a list of frame dimensions.
//! CONTEXT: Values are stored flat in row-major order over the variable's
//! own (local) dimension order, last local dimension varying fastest.
//! The variable keeps a copy of its local shape so it can be indexed
//! without going back to the frame.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::value::{Scalar, ScalarKind};

/// Typed flat storage for a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum VariableData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Bool(Vec<bool>),
    Text(Vec<String>),
}

impl VariableData {
    pub fn len(&self) -> usize {
        match self {
            VariableData::Int(v) => v.len(),
            VariableData::Float(v) => v.len(),
            VariableData::Bool(v) => v.len(),
            VariableData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            VariableData::Int(_) => ScalarKind::Int,
            VariableData::Float(_) => ScalarKind::Float,
            VariableData::Bool(_) => ScalarKind::Bool,
            VariableData::Text(_) => ScalarKind::Text,
        }
    }

    /// Value at a flat offset, or None past the end.
    pub fn get(&self, offset: usize) -> Option<Scalar> {
        match self {
            VariableData::Int(v) => v.get(offset).map(|x| Scalar::Int(*x)),
            VariableData::Float(v) => v.get(offset).map(|x| Scalar::Float(*x)),
            VariableData::Bool(v) => v.get(offset).map(|x| Scalar::Bool(*x)),
            VariableData::Text(v) => v.get(offset).map(|x| Scalar::Text(x.clone())),
        }
    }
}

/// A variable registered in a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    /// Local dimension order (names of frame dimensions).
    pub dimensions: Vec<String>,
    /// Extent of each local dimension, parallel to `dimensions`.
    pub shape: Vec<usize>,
    pub data: VariableData,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    pub fn kind(&self) -> ScalarKind {
        self.data.kind()
    }

    /// Looks up the value at a local coordinate tuple.
    /// The tuple must have one entry per local dimension, each within that
    /// dimension's extent. A rank-0 variable is addressed with `&[]`.
    pub fn at(&self, index: &[usize]) -> Result<Scalar, FrameError> {
        if index.len() != self.rank() {
            return Err(FrameError::RankMismatch {
                variable: self.name.clone(),
                rank: self.rank(),
                given: index.len(),
            });
        }
        if self.shape.len() != self.rank() {
            return Err(FrameError::CorruptShape {
                variable: self.name.clone(),
                rank: self.rank(),
                shape_len: self.shape.len(),
            });
        }

        let mut offset = 0usize;
        for (&i, &extent) in index.iter().zip(self.shape.iter()) {
            if i >= extent {
                return Err(self.out_of_bounds(index));
            }
            offset = offset * extent + i;
        }

        self.data.get(offset).ok_or_else(|| self.out_of_bounds(index))
    }

    fn out_of_bounds(&self, index: &[usize]) -> FrameError {
        FrameError::IndexOutOfBounds {
            variable: self.name.clone(),
            index: index.to_vec(),
        }
    }
}
