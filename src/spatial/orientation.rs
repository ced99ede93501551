//! Mapping from strip coordinates to image coordinates
//!
//! A strip is addressed by `(offset, position)`: `position` runs along the
//! seam (`0..length`) and `offset` runs across it (`0..width`). The
//! orientation decides which image axis each of them follows, which keeps
//! the seam search itself axis-agnostic.

use std::fmt;
use std::str::FromStr;

/// Strategy mapping strip coordinates onto image `[x, y]` offsets
pub trait Orientation: Copy + Send + Sync {
    /// Image offset `[x, y]` of cell `(offset, position)` relative to the strip origin
    fn map(self, offset: usize, position: usize) -> [usize; 2];

    /// Image-space `[width, height]` covered by a `length` x `width` strip
    fn extent(self, length: usize, width: usize) -> [usize; 2] {
        if length == 0 || width == 0 {
            return [0, 0];
        }
        let far = self.map(width - 1, length - 1);
        [far[0] + 1, far[1] + 1]
    }
}

/// Absolute coordinate of a strip-relative offset
///
/// Callers validate the strip against region bounds first, so the sum
/// cannot overflow for any cell of a validated strip.
pub const fn translate(origin: [usize; 2], local: [usize; 2]) -> [usize; 2] {
    [origin[0] + local[0], origin[1] + local[1]]
}

/// Seam advancing one row per position, cutting between horizontally adjacent tiles
///
/// Maps `(offset, position)` to `(row = position, col = offset)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlongRows;

/// Seam advancing one column per position, cutting between vertically stacked tiles
///
/// Maps `(offset, position)` to `(row = offset, col = position)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlongColumns;

impl Orientation for AlongRows {
    fn map(self, offset: usize, position: usize) -> [usize; 2] {
        [offset, position]
    }
}

impl Orientation for AlongColumns {
    fn map(self, offset: usize, position: usize) -> [usize; 2] {
        [position, offset]
    }
}

/// Orientation chosen at runtime, e.g. from command-line input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeamDirection {
    /// Tiles side by side, seam runs top to bottom (`AlongRows`)
    #[default]
    Horizontal,
    /// Tiles stacked, seam runs left to right (`AlongColumns`)
    Vertical,
}

impl Orientation for SeamDirection {
    fn map(self, offset: usize, position: usize) -> [usize; 2] {
        match self {
            Self::Horizontal => AlongRows.map(offset, position),
            Self::Vertical => AlongColumns.map(offset, position),
        }
    }
}

impl fmt::Display for SeamDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for SeamDirection {
    type Err = crate::io::error::SeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(crate::io::error::invalid_parameter(
                "direction",
                &s,
                &"expected 'horizontal' or 'vertical'",
            )),
        }
    }
}
