//! FILENAME: core/persistence/src/layout.rs
//! PURPOSE: Everything an export needs to know before writing the first row.
//! CONTEXT: Built once per export from a read-only frame:
//! 1. Variables sorted by name fix the column order.
//! 2. Dimensions sorted by name fix the global dimension order, and their
//!    extents form the shape whose cartesian product gives the rows.
//! 3. Each variable gets an index map: entry i is the position, in the
//!    global order, of the variable's i-th local dimension. A row's global
//!    coordinate is turned into a variable's local coordinate by reading
//!    `global[index_map[i]]` for each i.
//!
//! Every frame dimension takes part in the row enumeration, including ones
//! no variable depends on. Such a dimension repeats each row once per step
//! along it; that is the intended table shape, not something to collapse.

use mdframe::{CartesianIndices, Dimension, Frame, Variable};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::ExportError;

/// Positions of a variable's local dimensions within the global order.
pub type IndexMap = SmallVec<[usize; 8]>;

#[derive(Debug)]
pub struct TableLayout<'a> {
    variables: Vec<&'a Variable>,
    dimensions: Vec<&'a Dimension>,
    shape: Vec<usize>,
    index_maps: Vec<IndexMap>,
    max_rank: usize,
}

impl<'a> TableLayout<'a> {
    /// Fails with `EmptyOutput` if the frame has no variables, and with
    /// `StructuralInconsistency` if a variable names a dimension the frame
    /// does not have.
    pub fn build(frame: &'a Frame) -> Result<Self, ExportError> {
        let variables = frame.sorted_variables();
        if variables.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        let dimensions = frame.sorted_dimensions();
        let shape: Vec<usize> = dimensions.iter().map(|d| d.size).collect();

        let positions: FxHashMap<&str, usize> = dimensions
            .iter()
            .enumerate()
            .map(|(pos, dim)| (dim.name.as_str(), pos))
            .collect();

        let mut index_maps = Vec::with_capacity(variables.len());
        for var in &variables {
            let mut map = IndexMap::with_capacity(var.rank());
            for dim in &var.dimensions {
                let pos = positions.get(dim.as_str()).copied().ok_or_else(|| {
                    ExportError::StructuralInconsistency {
                        variable: var.name.clone(),
                        dimension: dim.clone(),
                    }
                })?;
                map.push(pos);
            }
            index_maps.push(map);
        }

        let max_rank = variables.iter().map(|v| v.rank()).max().unwrap_or(0);

        Ok(TableLayout {
            variables,
            dimensions,
            shape,
            index_maps,
            max_rank,
        })
    }

    /// Variables in column order.
    pub fn variables(&self) -> &[&'a Variable] {
        &self.variables
    }

    /// Dimensions in global (row enumeration) order.
    pub fn dimensions(&self) -> &[&'a Dimension] {
        &self.dimensions
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn index_map(&self, column: usize) -> &[usize] {
        &self.index_maps[column]
    }

    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    /// Column names joined with commas.
    pub fn header_line(&self) -> String {
        self.variables
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rough number of data rows, for pre-sizing only. Saturates instead
    /// of overflowing.
    pub fn row_count_hint(&self) -> usize {
        self.shape
            .iter()
            .fold(1usize, |acc, &extent| acc.saturating_mul(extent))
    }

    /// Global coordinate tuples, one per output row, in row order.
    pub fn rows(&self) -> CartesianIndices {
        CartesianIndices::new(&self.shape)
    }

    /// Writes the local coordinate of column `column` for the row at
    /// `global` into `local`, replacing its previous contents.
    pub fn fill_local(&self, column: usize, global: &[usize], local: &mut Vec<usize>) {
        local.clear();
        local.extend(self.index_maps[column].iter().map(|&pos| global[pos]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdframe::VariableData;

    fn frame_abc() -> Frame {
        let mut frame = Frame::new();
        frame.add_dimension("c", 2).unwrap();
        frame.add_dimension("a", 2).unwrap();
        frame.add_dimension("b", 3).unwrap();
        frame
            .add_variable("ba", &["b", "a"], VariableData::Int(vec![0; 6]))
            .unwrap();
        frame
            .add_variable("c_only", &["c"], VariableData::Int(vec![0; 2]))
            .unwrap();
        frame
    }

    #[test]
    fn test_index_map_follows_global_order() {
        let frame = frame_abc();
        let layout = TableLayout::build(&frame).unwrap();

        let dims: Vec<&str> = layout.dimensions().iter().map(|d| d.name()).collect();
        assert_eq!(dims, vec!["a", "b", "c"]);
        assert_eq!(layout.shape(), &[2, 3, 2]);

        assert_eq!(layout.variables()[0].name(), "ba");
        assert_eq!(layout.index_map(0), &[1, 0]);
        assert_eq!(layout.index_map(1), &[2]);
    }

    #[test]
    fn test_fill_local() {
        let frame = frame_abc();
        let layout = TableLayout::build(&frame).unwrap();
        let mut local = Vec::with_capacity(layout.max_rank());

        // global (a, b, c) = (1, 2, 0)
        layout.fill_local(0, &[1, 2, 0], &mut local);
        assert_eq!(local, vec![2, 1]);

        layout.fill_local(1, &[1, 2, 0], &mut local);
        assert_eq!(local, vec![0]);
    }

    #[test]
    fn test_header_and_hint() {
        let frame = frame_abc();
        let layout = TableLayout::build(&frame).unwrap();
        assert_eq!(layout.header_line(), "ba,c_only");
        assert_eq!(layout.row_count_hint(), 12);
        assert_eq!(layout.rows().count(), 12);
        assert_eq!(layout.max_rank(), 2);
    }

    #[test]
    fn test_empty_frame_is_empty_output() {
        let mut frame = Frame::new();
        frame.add_dimension("a", 4).unwrap();
        assert!(matches!(
            TableLayout::build(&frame),
            Err(ExportError::EmptyOutput)
        ));
    }

    #[test]
    fn test_missing_dimension_is_inconsistent() {
        let mut frame = frame_abc();
        frame.dimensions.remove("c");

        match TableLayout::build(&frame) {
            Err(ExportError::StructuralInconsistency { variable, dimension }) => {
                assert_eq!(variable, "c_only");
                assert_eq!(dimension, "c");
            }
            other => panic!("Expected StructuralInconsistency, got {:?}", other),
        }
    }

    #[test]
    fn test_no_dimensions_gives_single_row() {
        let mut frame = Frame::new();
        frame
            .add_variable("k", &[], VariableData::Float(vec![9.5]))
            .unwrap();
        let layout = TableLayout::build(&frame).unwrap();
        assert!(layout.shape().is_empty());
        assert_eq!(layout.rows().count(), 1);
        assert_eq!(layout.row_count_hint(), 1);
    }
}
