//! Seam constants and runtime configuration defaults

/// Weight given to source B when writing the pixel on the cut
pub const CUT_BLEND_WEIGHT: f64 = 0.5;

// Below this many strip cells the rayon fork/join overhead outweighs the work
/// Minimum number of cells (length x width) before passes run in parallel
pub const PARALLEL_MIN_CELLS: usize = 4096;

/// Default overlap between joined images, in pixels
pub const DEFAULT_OVERLAP: usize = 16;

// Output settings
/// Suffix added to joined output filenames
pub const OUTPUT_SUFFIX: &str = "_joined";
/// Suffix added to seam visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_seam";
/// Color used to draw the seam in visualizations
pub const SEAM_HIGHLIGHT: [u8; 4] = [255, 0, 64, 255];

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "seamcut=warn";
