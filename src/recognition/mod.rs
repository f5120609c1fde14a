//! Text recognition of cropped cell images.
//!
//! The pipeline treats recognition as a collaborator behind a trait: any
//! engine that can turn a cell crop into a string plugs in. The bundled
//! [`TesseractRecognizer`] shells out to the Tesseract binary; tests
//! substitute in-process fakes.

pub mod tesseract;

pub use tesseract::TesseractRecognizer;

use crate::core::GridScanError;
use image::DynamicImage;

/// A recognizer that turns one cropped cell image into its text content.
///
/// Implementations must be shareable across threads so that cell crops can
/// be recognized in parallel. Failures should be returned as errors; the
/// pipeline downgrades them to empty cells rather than aborting the table.
pub trait CellRecognizer: Send + Sync {
    /// Recognizes the text visible in a single cell crop.
    fn recognize(&self, cell: &DynamicImage) -> Result<String, GridScanError>;
}
