//! FILENAME: core/mdframe/src/lib.rs
//! PURPOSE: Main library entry point for the multi-dimensional frame model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cartesian;
pub mod dimension;
pub mod error;
pub mod frame;
pub mod value;
pub mod variable;

// Re-export commonly used types at the crate root
pub use cartesian::{cartesian_count, cartesian_indices, CartesianIndices, Coord};
pub use dimension::Dimension;
pub use error::FrameError;
pub use frame::Frame;
pub use value::{Scalar, ScalarKind, ScalarVisitor, TextVisitor};
pub use variable::{Variable, VariableData};
