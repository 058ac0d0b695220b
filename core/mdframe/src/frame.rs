//! FILENAME: core/mdframe/src/frame.rs
//! PURPOSE: The container that owns a frame's dimensions and variables.
//! CONTEXT: Both collections are keyed by name. Insertion order is not
//! kept; anything that needs a stable order (export, display) asks for the
//! sorted views, which order by name using plain byte-wise string comparison.

use std::collections::{HashMap, HashSet};

use crate::cartesian::cartesian_count;
use crate::dimension::Dimension;
use crate::error::FrameError;
use crate::variable::{Variable, VariableData};

/// A set of named dimensions and the variables defined over them.
///
/// Invariant: every dimension named by a variable exists in `dimensions`.
/// `add_variable` enforces it; code that edits the maps directly is on
/// its own.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub dimensions: HashMap<String, Dimension>,
    pub variables: HashMap<String, Variable>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            dimensions: HashMap::new(),
            variables: HashMap::new(),
        }
    }

    /// Registers a dimension. Sizes must be positive.
    pub fn add_dimension(&mut self, name: &str, size: usize) -> Result<&mut Self, FrameError> {
        if self.dimensions.contains_key(name) {
            return Err(FrameError::DuplicateDimension(name.to_string()));
        }
        if size == 0 {
            return Err(FrameError::InvalidExtent {
                name: name.to_string(),
            });
        }
        self.dimensions
            .insert(name.to_string(), Dimension::new(name, size));
        Ok(self)
    }

    /// Registers a variable over `dims` (its local dimension order).
    /// `data` must hold exactly one value per local coordinate, row-major.
    pub fn add_variable(
        &mut self,
        name: &str,
        dims: &[&str],
        data: VariableData,
    ) -> Result<&mut Self, FrameError> {
        if self.variables.contains_key(name) {
            return Err(FrameError::DuplicateVariable(name.to_string()));
        }

        let mut seen = HashSet::with_capacity(dims.len());
        let mut shape = Vec::with_capacity(dims.len());
        for dim in dims {
            if !seen.insert(*dim) {
                return Err(FrameError::DuplicateVariableDimension {
                    variable: name.to_string(),
                    dimension: dim.to_string(),
                });
            }
            let dimension = self
                .dimensions
                .get(*dim)
                .ok_or_else(|| FrameError::UnknownDimension {
                    variable: name.to_string(),
                    dimension: dim.to_string(),
                })?;
            shape.push(dimension.size);
        }

        let expected = cartesian_count(&shape).ok_or_else(|| FrameError::ShapeOverflow {
            variable: name.to_string(),
        })?;
        if data.len() != expected {
            return Err(FrameError::ShapeMismatch {
                variable: name.to_string(),
                expected,
                actual: data.len(),
            });
        }

        self.variables.insert(
            name.to_string(),
            Variable {
                name: name.to_string(),
                dimensions: dims.iter().map(|d| d.to_string()).collect(),
                shape,
                data,
            },
        );
        Ok(self)
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty() && self.variables.is_empty()
    }

    /// Dimensions ordered by name, ascending.
    pub fn sorted_dimensions(&self) -> Vec<&Dimension> {
        let mut dims: Vec<&Dimension> = self.dimensions.values().collect();
        dims.sort_by(|a, b| a.name.cmp(&b.name));
        dims
    }

    /// Variables ordered by name, ascending.
    pub fn sorted_variables(&self) -> Vec<&Variable> {
        let mut vars: Vec<&Variable> = self.variables.values().collect();
        vars.sort_by(|a, b| a.name.cmp(&b.name));
        vars
    }

    /// Highest rank among the registered variables (0 if there are none).
    pub fn max_rank(&self) -> usize {
        self.variables.values().map(Variable::rank).max().unwrap_or(0)
    }
}
