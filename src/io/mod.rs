/// Command-line interface for joining image pairs
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Joining two images across a seam-cut overlap
pub mod join;
/// Seam overlays for inspecting joins
pub mod visualization;
