//! Numeric helpers shared by the error metrics and the compositor

/// Channel normalization and per-channel blending for supported pixel types
pub mod pixel;

pub use pixel::SeamPixel;
