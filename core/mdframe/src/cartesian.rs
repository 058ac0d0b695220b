//! FILENAME: core/mdframe/src/cartesian.rs
//! PURPOSE: Enumerates every coordinate tuple of a shape.
//! CONTEXT: Order is row-major: dimension 0 is the outermost loop and the
//! last dimension varies fastest, i.e. tuples come out in increasing order
//! when read as mixed-radix numbers with the extents as radices.
//!
//! Edge cases:
//! - An empty shape has exactly one (empty) coordinate tuple.
//! - A shape containing a zero extent has no tuples at all.

use std::iter::FusedIterator;

use smallvec::{smallvec, SmallVec};

/// A coordinate tuple. Frames rarely exceed a handful of dimensions, so
/// tuples of up to 8 entries stay inline.
pub type Coord = SmallVec<[usize; 8]>;

/// Number of tuples `shape` produces, or None if it overflows `usize`.
pub fn cartesian_count(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}

/// Lazily walks a shape like an odometer.
#[derive(Debug, Clone)]
pub struct CartesianIndices {
    shape: Vec<usize>,
    current: Coord,
    remaining: Option<usize>,
    done: bool,
}

impl CartesianIndices {
    pub fn new(shape: &[usize]) -> Self {
        CartesianIndices {
            shape: shape.to_vec(),
            current: smallvec![0; shape.len()],
            remaining: cartesian_count(shape),
            done: shape.contains(&0),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    // Moves `current` to the next tuple; flags `done` after the last one.
    fn advance(&mut self) {
        for axis in (0..self.shape.len()).rev() {
            self.current[axis] += 1;
            if self.current[axis] < self.shape[axis] {
                return;
            }
            self.current[axis] = 0;
        }
        self.done = true;
    }
}

impl Iterator for CartesianIndices {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        self.advance();
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CartesianIndices {}

/// Eagerly enumerates every tuple of `shape`, in the same order as
/// `CartesianIndices`. Memory grows with the product of the extents, so
/// prefer the iterator for large shapes.
pub fn cartesian_indices(shape: &[usize]) -> Vec<Coord> {
    let mut output = Vec::with_capacity(cartesian_count(shape).unwrap_or(0));
    let mut buffer: Coord = smallvec![0; shape.len()];
    collect_recursive(shape, 0, &mut buffer, &mut output);
    output
}

fn collect_recursive(shape: &[usize], axis: usize, buffer: &mut Coord, output: &mut Vec<Coord>) {
    if axis == shape.len() {
        output.push(buffer.clone());
        return;
    }
    for i in 0..shape[axis] {
        buffer[axis] = i;
        collect_recursive(shape, axis + 1, buffer, output);
    }
}
