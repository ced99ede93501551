//! Minimum-error boundary cut through the overlap of two tiles
//!
//! The solver scores every cell of the overlap strip with an error metric,
//! accumulates the cheapest connected path cost along the strip with dynamic
//! programming, and walks back from the cheapest final cell to recover the
//! cut. Scratch planes and the seam buffer are allocated once per solver and
//! overwritten by each request.

use crate::algorithm::buffer::CostPlanes;
use crate::algorithm::compositor::Compositor;
use crate::algorithm::metric::{ErrorMetric, SquaredDifference};
use crate::algorithm::seam::Seam;
use crate::io::configuration::PARALLEL_MIN_CELLS;
use crate::io::error::{Result, check_bounds, computation_error, invalid_parameter};
use crate::spatial::orientation::{Orientation, translate};
use crate::spatial::{Region, RegionMut};
use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Axis, Zip};

/// How the local error and cumulative cost passes are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Every cell on the calling thread
    Sequential,
    /// Cells of a pass spread over the rayon pool when the strip is large enough
    ///
    /// Without the `parallel` feature this behaves like `Sequential`.
    #[default]
    Parallel,
}

/// Overlap strip dimensions and scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Positions along the seam
    pub length: usize,
    /// Candidate cut offsets across the seam
    pub width: usize,
    /// Pass scheduling; results are identical in both modes
    pub execution: Execution,
}

impl StripConfig {
    /// Strip of `length` positions and `width` offsets with default scheduling
    pub const fn new(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            execution: Execution::Parallel,
        }
    }

    /// Same strip with the given scheduling
    #[must_use]
    pub const fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Reject degenerate strips
    ///
    /// # Errors
    ///
    /// Returns `SeamError::InvalidParameter` if `length` or `width` is zero
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(invalid_parameter(
                "length",
                &self.length,
                &"strip must span at least one position",
            ));
        }
        if self.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"strip must offer at least one cut offset",
            ));
        }
        Ok(())
    }

    /// Total number of cells in the strip
    pub const fn cells(&self) -> usize {
        self.length.saturating_mul(self.width)
    }
}

/// Seam search bound to two source regions, an orientation and an error metric
pub struct SeamSolver<'a, R, O, E = SquaredDifference> {
    source_a: &'a R,
    source_b: &'a R,
    config: StripConfig,
    orientation: O,
    metric: E,
    planes: CostPlanes,
    seam: Seam,
}

impl<'a, R, O> SeamSolver<'a, R, O, SquaredDifference>
where
    R: Region,
    O: Orientation,
{
    /// Create a solver using the squared-difference metric
    ///
    /// # Errors
    ///
    /// Returns `SeamError::InvalidParameter` for a zero strip length or width
    pub fn new(source_a: &'a R, source_b: &'a R, config: StripConfig, orientation: O) -> Result<Self> {
        Self::with_metric(source_a, source_b, config, orientation, SquaredDifference)
    }
}

impl<'a, R, O, E> SeamSolver<'a, R, O, E>
where
    R: Region,
    O: Orientation,
    E: ErrorMetric<R>,
{
    /// Create a solver with a custom error metric
    ///
    /// # Errors
    ///
    /// Returns `SeamError::InvalidParameter` for a zero strip length or width
    pub fn with_metric(
        source_a: &'a R,
        source_b: &'a R,
        config: StripConfig,
        orientation: O,
        metric: E,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            source_a,
            source_b,
            config,
            orientation,
            metric,
            planes: CostPlanes::new(config.length, config.width),
            seam: Seam::new(config.length, config.width),
        })
    }

    /// Swap the error metric, keeping the allocated scratch buffers
    pub fn replace_metric<F: ErrorMetric<R>>(self, metric: F) -> SeamSolver<'a, R, O, F> {
        SeamSolver {
            source_a: self.source_a,
            source_b: self.source_b,
            config: self.config,
            orientation: self.orientation,
            metric,
            planes: self.planes,
            seam: self.seam,
        }
    }

    /// Strip configuration
    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Orientation strategy
    pub const fn orientation(&self) -> O {
        self.orientation
    }

    /// Error metric
    pub const fn metric(&self) -> &E {
        &self.metric
    }

    /// Seam from the most recent `compute_seam`
    pub const fn seam(&self) -> &Seam {
        &self.seam
    }

    /// Local error of the most recent request at `(position, offset)`
    pub fn local_error(&self, position: usize, offset: usize) -> Option<f64> {
        self.planes.local(position, offset)
    }

    /// Cumulative cost of the most recent request at `(position, offset)`
    pub fn cumulative_cost(&self, position: usize, offset: usize) -> Option<f64> {
        self.planes.cumulative(position, offset)
    }

    /// Compositor over the same sources and strip
    pub const fn compositor(&self) -> Compositor<'a, R, O> {
        Compositor::from_parts(
            self.source_a,
            self.source_b,
            self.config.length,
            self.config.width,
            self.orientation,
        )
    }

    /// Find the minimal cut between the strips of A and B at the given origins
    ///
    /// # Errors
    ///
    /// Returns `SeamError::OutOfBounds` if either strip leaves its source, or
    /// `SeamError::Computation` if the metric yields a negative or NaN error.
    pub fn compute_seam(&mut self, origin_a: [usize; 2], origin_b: [usize; 2]) -> Result<&Seam> {
        let extent = self.orientation.extent(self.config.length, self.config.width);
        check_bounds("source A", origin_a, extent, self.source_a.dimensions())?;
        check_bounds("source B", origin_b, extent, self.source_b.dimensions())?;

        let parallel = self.runs_parallel();
        self.fill_local_errors(origin_a, origin_b, parallel)?;
        self.accumulate(parallel);
        self.trace_back();

        tracing::debug!(
            length = self.config.length,
            width = self.config.width,
            parallel,
            cost = self.seam.cost(),
            "Computed seam"
        );

        Ok(&self.seam)
    }

    /// Compute the seam and write the fused strip into `destination`
    ///
    /// # Errors
    ///
    /// Returns `SeamError::OutOfBounds` if a strip leaves its source or the
    /// destination, or `SeamError::Computation` for an invalid metric value.
    pub fn blend<D>(
        &mut self,
        origin_a: [usize; 2],
        origin_b: [usize; 2],
        destination: &mut D,
        destination_origin: [usize; 2],
    ) -> Result<&Seam>
    where
        D: RegionMut<Pixel = R::Pixel>,
    {
        let extent = self.orientation.extent(self.config.length, self.config.width);
        check_bounds(
            "destination",
            destination_origin,
            extent,
            destination.dimensions(),
        )?;

        self.compute_seam(origin_a, origin_b)?;
        self.compositor().fuse(
            &self.seam,
            origin_a,
            origin_b,
            destination,
            destination_origin,
        )?;

        Ok(&self.seam)
    }

    fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel")
            && self.config.execution == Execution::Parallel
            && self.config.cells() >= PARALLEL_MIN_CELLS
    }

    fn fill_local_errors(
        &mut self,
        origin_a: [usize; 2],
        origin_b: [usize; 2],
        parallel: bool,
    ) -> Result<()> {
        let (source_a, source_b) = (self.source_a, self.source_b);
        let orientation = self.orientation;
        let metric = &self.metric;

        fill_cells(
            self.planes.local_plane_mut(),
            parallel,
            |position, offset| {
                let local = orientation.map(offset, position);
                metric.error(
                    source_a,
                    translate(origin_a, local),
                    source_b,
                    translate(origin_b, local),
                )
            },
        );

        // Infinity is allowed and marks a cell the cut should avoid
        let invalid = self
            .planes
            .local_plane()
            .indexed_iter()
            .find(|(_, error)| error.is_nan() || **error < 0.0)
            .map(|((position, offset), error)| (position, offset, *error));

        if let Some((position, offset, error)) = invalid {
            return Err(computation_error(
                "local error",
                &format!("metric returned {error} at position {position}, offset {offset}"),
            ));
        }

        tracing::trace!("Local error pass complete");
        Ok(())
    }

    fn accumulate(&mut self, parallel: bool) {
        let (local, mut cumulative) = self.planes.split_mut();
        let length = local.nrows();

        cumulative.row_mut(0).assign(&local.row(0));

        for position in 1..length {
            let (done, mut rest) = cumulative.view_mut().split_at(Axis(0), position);
            let previous = done.row(position - 1);
            let errors = local.row(position);

            fill_row(rest.row_mut(0), parallel, |offset| {
                errors.get(offset).copied().unwrap_or(f64::INFINITY)
                    + cheapest_predecessor(&previous, offset)
            });
        }

        tracing::trace!("Cumulative cost pass complete");
    }

    fn trace_back(&mut self) {
        let cost = trace_minimal_path(self.planes.cumulative_plane(), self.seam.cuts_mut());
        self.seam.set_cost(cost);
    }
}

/// Minimum cumulative cost among `offset - 1`, `offset` and `offset + 1`
///
/// Neighbours outside the row are skipped.
pub fn cheapest_predecessor(previous: &ArrayView1<'_, f64>, offset: usize) -> f64 {
    let lower = offset.saturating_sub(1);
    (lower..=offset + 1)
        .filter_map(|neighbour| previous.get(neighbour).copied())
        .fold(f64::INFINITY, f64::min)
}

/// Recover the cheapest connected path from a cumulative cost plane
///
/// Writes one offset per position into `cuts` and returns the path's total
/// cost. The final offset is the leftmost minimum of the last row. Walking
/// back, the current offset is kept unless the left neighbour and then the
/// right neighbour is strictly cheaper, which makes ties deterministic.
pub fn trace_minimal_path(cumulative: ArrayView2<'_, f64>, cuts: &mut [usize]) -> f64 {
    let (length, width) = cumulative.dim();
    if length == 0 || width == 0 {
        return 0.0;
    }
    let last = length - 1;

    let mut best = 0;
    let mut best_cost = f64::INFINITY;
    for (offset, &cost) in cumulative.row(last).indexed_iter() {
        if cost < best_cost {
            best = offset;
            best_cost = cost;
        }
    }
    if let Some(slot) = cuts.get_mut(last) {
        *slot = best;
    }

    let cost_at = |position: usize, offset: usize| {
        cumulative
            .get([position, offset])
            .copied()
            .unwrap_or(f64::INFINITY)
    };

    let mut center = best;
    for position in (1..length).rev() {
        let mut chosen = center;
        let mut chosen_cost = cost_at(position - 1, center);

        if center > 0 {
            let left = cost_at(position - 1, center - 1);
            if left < chosen_cost {
                chosen = center - 1;
                chosen_cost = left;
            }
        }
        if center + 1 < width && cost_at(position - 1, center + 1) < chosen_cost {
            chosen = center + 1;
        }

        if let Some(slot) = cuts.get_mut(position - 1) {
            *slot = chosen;
        }
        center = chosen;
    }

    cost_at(last, best)
}

#[cfg(feature = "parallel")]
fn fill_cells<F>(plane: ArrayViewMut2<'_, f64>, parallel: bool, evaluate: F)
where
    F: Fn(usize, usize) -> f64 + Sync + Send,
{
    let cells = Zip::indexed(plane);
    if parallel {
        tracing::trace!(threads = rayon::current_num_threads(), "Scoring strip in parallel");
        cells.par_for_each(|(position, offset), cell| *cell = evaluate(position, offset));
    } else {
        cells.for_each(|(position, offset), cell| *cell = evaluate(position, offset));
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_cells<F>(plane: ArrayViewMut2<'_, f64>, _parallel: bool, evaluate: F)
where
    F: Fn(usize, usize) -> f64,
{
    Zip::indexed(plane).for_each(|(position, offset), cell| *cell = evaluate(position, offset));
}

// The join at the end of par_for_each is the barrier between rows
#[cfg(feature = "parallel")]
fn fill_row<F>(row: ArrayViewMut1<'_, f64>, parallel: bool, evaluate: F)
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    let cells = Zip::indexed(row);
    if parallel {
        cells.par_for_each(|offset, cell| *cell = evaluate(offset));
    } else {
        cells.for_each(|offset, cell| *cell = evaluate(offset));
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_row<F>(row: ArrayViewMut1<'_, f64>, _parallel: bool, evaluate: F)
where
    F: Fn(usize) -> f64,
{
    Zip::indexed(row).for_each(|offset, cell| *cell = evaluate(offset));
}
