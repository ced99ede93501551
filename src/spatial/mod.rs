//! Spatial abstractions over the images a seam is cut through
//!
//! This module contains:
//! - Region traits for random-access pixel reads and writes
//! - Orientation strategies mapping strip cells onto image coordinates

/// Strip-to-image coordinate mapping strategies
pub mod orientation;
/// Pixel source and destination traits with image and grid implementations
pub mod region;

pub use orientation::{AlongColumns, AlongRows, Orientation, SeamDirection};
pub use region::{Region, RegionMut};
