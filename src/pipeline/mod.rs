//! The table extraction pipeline module.
//!
//! This module provides the pipeline that combines the processing stages
//! to turn scanned images into rectangular tables: binarization, line
//! extraction, cell location, recognition, and table assembly.

mod config;
mod extractor;

// Re-export the main pipeline components for easier access
pub use config::{ConfigFormat, ConfigLoader};
pub use extractor::{GridScan, GridScanBuilder};
