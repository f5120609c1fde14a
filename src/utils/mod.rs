//! Utility functions for the extraction pipeline.
//!
//! This module provides the image handling helpers used throughout the
//! pipeline stages.

pub mod image;

// Re-export image processing functions
pub use image::{crop_box, to_grayscale};
