//! Image processing stages of the table extraction pipeline.
//!
//! Each stage is a small struct wrapping its configuration, with one
//! operation that transforms an image into the representation the next
//! stage consumes:
//!
//! * `binarize` - Adaptive thresholding of scanned pages into ink masks
//! * `morphology` - Directional erode, dilate, and open primitives
//! * `lines` - Structural line extraction via directional openings
//! * `locate` - Cell discovery and row grouping on the grid mask

pub mod binarize;
pub mod lines;
pub mod locate;
pub mod morphology;

pub use binarize::Binarizer;
pub use lines::LineExtractor;
pub use locate::{group_into_rows, CellLocator};
