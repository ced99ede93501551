/// Single-allocation scratch planes for local error and cumulative cost
pub mod buffer;
/// Seam-guided compositing into a destination region
pub mod compositor;
/// Pluggable per-pixel error metrics
pub mod metric;
/// Cut path type with continuity guarantees
pub mod seam;
/// Dynamic-programming seam search
pub mod solver;

pub use compositor::Compositor;
pub use metric::{AbsoluteDifference, ErrorMetric, MetricKind, SquaredDifference};
pub use seam::Seam;
pub use solver::{Execution, SeamSolver, StripConfig};
