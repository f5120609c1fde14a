//! Domain types produced and consumed by the extraction pipeline.
//!
//! This module contains the value types that cross stage boundaries:
//! bounding boxes for located cells and the rectangular output table.

pub mod geometry;
pub mod table;

pub use geometry::BoundingBox;
pub use table::Table;
