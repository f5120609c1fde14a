//! # gridscan
//!
//! A Rust library that extracts tabular data from scanned document images.
//! Detects a table's ruling lines, segments the grid into cells, recognizes
//! each cell with an OCR collaborator, and assembles a rectangular table.
//!
//! ## Features
//!
//! - Complete pipeline from scanned image to table of strings
//! - Adaptive thresholding that tolerates uneven scan lighting
//! - Structural line extraction with directional morphology
//! - Reading-order cell location robust to slight skew
//! - Pluggable recognition behind a trait, with a bundled Tesseract adapter
//! - Parallel batch and per-cell processing via rayon
//!
//! ## Components
//!
//! - **Binarization**: Turn a scan into a binary ink mask
//! - **Line Extraction**: Isolate the horizontal and vertical rulings
//! - **Cell Location**: Find enclosed cells and order them into rows
//! - **Recognition**: Read each cell crop through a [`CellRecognizer`]
//! - **Assembly**: Pad and concatenate rows into rectangular [`Table`]s
//!
//! ## Modules
//!
//! * [`core`] - Configuration, constants, error handling, and validation
//! * [`domain`] - Bounding boxes and the table type
//! * [`processors`] - The per-stage image operators
//! * [`recognition`] - The recognizer trait and the Tesseract adapter
//! * [`pipeline`] - The assembled pipeline, its builder, and config files
//! * [`utils`] - Image helpers shared by the stages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gridscan::{GridScan, TesseractRecognizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let image = image::open("scan.png")?.to_rgb8();
//!
//!     let pipeline = GridScan::builder(TesseractRecognizer::new()).build()?;
//!     let table = pipeline.extract_table(&image)?;
//!
//!     for row in table.rows() {
//!         println!("{}", row.join(" | "));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Tuning and configuration files
//!
//! Stage parameters can be set on the builder or loaded from TOML or JSON:
//!
//! ```rust,no_run
//! use gridscan::{GridScanBuilder, GridScanConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GridScanConfig::from_file("gridscan.toml")?;
//! let pipeline = GridScanBuilder::from_config(config).build()?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod core;
pub mod domain;

pub mod pipeline;
pub mod processors;
pub mod recognition;
pub mod utils;

pub use crate::core::{init_tracing, GridScanConfig, GridScanError};
pub use crate::domain::{BoundingBox, Table};
pub use crate::pipeline::{GridScan, GridScanBuilder};
pub use crate::recognition::{CellRecognizer, TesseractRecognizer};

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use gridscan::prelude::*;
/// ```
///
/// Included items focus on the most common tasks:
/// - Pipeline assembly (`GridScan`, `GridScanBuilder`, `GridScanConfig`)
/// - Results (`Table`, `BoundingBox`)
/// - Recognition (`CellRecognizer`, `TesseractRecognizer`)
/// - Error handling (`GridScanError`)
///
/// For stage-level work (running a single binarization or locating cells
/// without recognition), import directly from the respective modules
/// (e.g., `gridscan::processors`, `gridscan::pipeline`).
pub mod prelude {
    // Pipeline assembly (essential)
    pub use crate::pipeline::{ConfigFormat, ConfigLoader, GridScan, GridScanBuilder};

    // Results and domain types (essential)
    pub use crate::domain::{BoundingBox, Table};

    // Recognition seam
    pub use crate::recognition::{CellRecognizer, TesseractRecognizer};

    // Error handling (essential)
    pub use crate::core::{GridScanConfig, GridScanError};
}
