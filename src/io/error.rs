//! Error types for seam computation, compositing and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all seam operations
#[derive(Debug)]
pub enum SeamError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Strip or command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An origin places part of the strip outside its region
    ///
    /// Coordinates are `[x, y]`. Origins are never clamped, so this is
    /// always a caller contract violation.
    OutOfBounds {
        /// Which region was addressed ("source A", "source B", "destination")
        region: &'static str,
        /// Origin supplied by the caller
        origin: [usize; 2],
        /// Extent of the strip in image coordinates
        extent: [usize; 2],
        /// Dimensions of the addressed region
        dimensions: [usize; 2],
    },

    /// A seam does not fit the strip it is being fused into
    SeamMismatch {
        /// Strip (length, width) expected by the compositor
        expected: (usize, usize),
        /// Seam (length, width) supplied by the caller
        actual: (usize, usize),
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                region,
                origin,
                extent,
                dimensions,
            } => {
                write!(
                    f,
                    "Strip of {}x{} at ({}, {}) exceeds {region} bounds ({}x{})",
                    extent[0], extent[1], origin[0], origin[1], dimensions[0], dimensions[1]
                )
            }
            Self::SeamMismatch { expected, actual } => {
                write!(
                    f,
                    "Seam spans {}x{} but the strip is {}x{} (length x width)",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SeamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for seam results
pub type Result<T> = std::result::Result<T, SeamError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SeamError {
    SeamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SeamError {
    SeamError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Verify that a strip of `extent` placed at `origin` lies inside `dimensions`
///
/// # Errors
///
/// Returns `SeamError::OutOfBounds` if any covered coordinate falls outside
/// the region, including when `origin + extent` overflows.
pub fn check_bounds(
    region: &'static str,
    origin: [usize; 2],
    extent: [usize; 2],
    dimensions: [usize; 2],
) -> Result<()> {
    let fits = |axis: usize| {
        let start = origin.get(axis).copied().unwrap_or(usize::MAX);
        let span = extent.get(axis).copied().unwrap_or(usize::MAX);
        let limit = dimensions.get(axis).copied().unwrap_or(0);
        start.checked_add(span).is_some_and(|end| end <= limit)
    };

    if fits(0) && fits(1) {
        Ok(())
    } else {
        Err(SeamError::OutOfBounds {
            region,
            origin,
            extent,
            dimensions,
        })
    }
}
