//! FILENAME: core/mdframe/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Dimension already exists: {0}")]
    DuplicateDimension(String),

    #[error("Dimension {name} must have a positive size")]
    InvalidExtent { name: String },

    #[error("Variable already exists: {0}")]
    DuplicateVariable(String),

    #[error("Variable {variable} references unknown dimension {dimension}")]
    UnknownDimension { variable: String, dimension: String },

    #[error("Variable {variable} lists dimension {dimension} more than once")]
    DuplicateVariableDimension { variable: String, dimension: String },

    #[error("Variable {variable} expects {expected} values, got {actual}")]
    ShapeMismatch {
        variable: String,
        expected: usize,
        actual: usize,
    },

    #[error("Variable {variable} has more values than a usize can count")]
    ShapeOverflow { variable: String },

    #[error("Variable {variable} has {rank} dimensions but a shape of length {shape_len}")]
    CorruptShape {
        variable: String,
        rank: usize,
        shape_len: usize,
    },

    #[error("Variable {variable} has rank {rank}, indexed with {given} coordinates")]
    RankMismatch {
        variable: String,
        rank: usize,
        given: usize,
    },

    #[error("Index {index:?} is out of bounds for variable {variable}")]
    IndexOutOfBounds { variable: String, index: Vec<usize> },
}
