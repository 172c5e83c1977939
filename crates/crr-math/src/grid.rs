//! `Grid` — square storage for a recombining binomial lattice.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`. For a lattice with `n`
//! steps the grid is `(n + 1) × (n + 1)`; entry `(j, i)` holds the node
//! reached after `i` steps with `j` down-moves. Only entries with `j ≤ i` are
//! nodes of the lattice; every other entry stays zero.

use crr_core::{Real, Size};
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

/// Square lattice storage indexed by `(down_moves, step)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(DMatrix<Real>);

impl Grid {
    /// Create a zero-filled grid for a lattice with `steps` time steps.
    pub fn zeros(steps: Size) -> Self {
        Self(DMatrix::zeros(steps + 1, steps + 1))
    }

    /// Number of rows (= number of columns = steps + 1).
    pub fn dim(&self) -> Size {
        self.0.nrows()
    }

    /// Number of time steps represented (= dim − 1).
    pub fn steps(&self) -> Size {
        self.dim().saturating_sub(1)
    }

    /// Total number of cells, `(steps + 1)²`.
    pub fn len(&self) -> Size {
        self.0.len()
    }

    /// Return `true` if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lattice nodes, `(steps + 1)(steps + 2) / 2`.
    pub fn node_count(&self) -> Size {
        let n = self.dim();
        n * (n + 1) / 2
    }

    /// The `step + 1` node values of column `step`, ordered by down-moves.
    pub fn nodes(&self, step: Size) -> Vec<Real> {
        self.column_nodes(step).map(|(_, _, v)| v).collect()
    }

    /// Iterate over every lattice node as `(down_moves, step, value)`,
    /// column by column.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (Size, Size, Real)> + '_ {
        (0..self.dim()).flat_map(move |i| self.column_nodes(i))
    }

    fn column_nodes(&self, i: Size) -> impl Iterator<Item = (Size, Size, Real)> + '_ {
        (0..=i).map(move |j| (j, i, self.0[(j, i)]))
    }

    /// Set rows `0..len` of column `dst` to rows `0..len` of column `src`
    /// multiplied by `factor`, as one bulk column operation.
    pub fn scale_column_from(&mut self, src: Size, dst: Size, len: Size, factor: Real) {
        let scaled = self.0.view((0, src), (len, 1)) * factor;
        self.0.view_mut((0, dst), (len, 1)).copy_from(&scaled);
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(Size, Size)> for Grid {
    type Output = Real;
    fn index(&self, (row, col): (Size, Size)) -> &Real {
        &self.0[(row, col)]
    }
}

impl IndexMut<(Size, Size)> for Grid {
    fn index_mut(&mut self, (row, col): (Size, Size)) -> &mut Real {
        &mut self.0[(row, col)]
    }
}
