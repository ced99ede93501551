//! Scratch storage for the local error and cumulative cost grids
//!
//! Both grids live in one `(2, length, width)` array so a solver allocates
//! exactly once. Plane 0 holds local errors, plane 1 cumulative costs, and
//! every access goes through a `(position, offset)` pair.

use ndarray::{Array3, ArrayView2, ArrayViewMut2, Axis};

const LOCAL_PLANE: usize = 0;
const CUMULATIVE_PLANE: usize = 1;

/// Local error and cumulative cost planes over one overlap strip
#[derive(Debug, Clone)]
pub struct CostPlanes {
    data: Array3<f64>,
}

impl CostPlanes {
    /// Allocate zeroed planes for a `length` x `width` strip
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            data: Array3::zeros((2, length, width)),
        }
    }

    /// Local error at `(position, offset)`
    pub fn local(&self, position: usize, offset: usize) -> Option<f64> {
        self.data.get([LOCAL_PLANE, position, offset]).copied()
    }

    /// Cumulative cost at `(position, offset)`
    pub fn cumulative(&self, position: usize, offset: usize) -> Option<f64> {
        self.data.get([CUMULATIVE_PLANE, position, offset]).copied()
    }

    /// Read-only view of the local error plane, indexed `[position, offset]`
    pub fn local_plane(&self) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), LOCAL_PLANE)
    }

    /// Read-only view of the cumulative cost plane, indexed `[position, offset]`
    pub fn cumulative_plane(&self) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), CUMULATIVE_PLANE)
    }

    /// Mutable view of the local error plane
    pub fn local_plane_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.data.index_axis_mut(Axis(0), LOCAL_PLANE)
    }

    /// Both planes at once: local errors first, cumulative costs second
    ///
    /// Each view is indexed `[position, offset]`. Used by the cumulative pass,
    /// which reads local errors while writing costs.
    pub fn split_mut(&mut self) -> (ArrayViewMut2<'_, f64>, ArrayViewMut2<'_, f64>) {
        let (local, cumulative) = self.data.view_mut().split_at(Axis(0), CUMULATIVE_PLANE);
        (
            local.index_axis_move(Axis(0), 0),
            cumulative.index_axis_move(Axis(0), 0),
        )
    }
}
