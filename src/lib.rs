//! Minimum-error boundary cuts for blending overlapping texture tiles
//!
//! Where two tiles overlap, a seam is searched through the overlap strip that
//! minimizes the accumulated per-pixel difference between both sources. The
//! strip is then fused so each side keeps its own pixels up to the seam, with
//! a single blended pixel on the cut itself.

#![forbid(unsafe_code)]

/// Seam search, error metrics and compositing
pub mod algorithm;
/// Command-line driver, configuration and error handling
pub mod io;
/// Pixel channel normalization and blending
pub mod math;
/// Region access and strip orientation
pub mod spatial;

pub use algorithm::{
    AbsoluteDifference, Compositor, ErrorMetric, Execution, MetricKind, Seam, SeamSolver,
    SquaredDifference, StripConfig,
};
pub use io::error::{Result, SeamError};
pub use math::SeamPixel;
pub use spatial::{AlongColumns, AlongRows, Orientation, Region, RegionMut, SeamDirection};
