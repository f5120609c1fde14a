//! Structural line extraction from binary ink masks.
//!
//! Table borders are long straight runs of ink, while glyphs and noise are
//! short in at least one direction. Opening the mask with a horizontal line
//! element keeps only runs spanning a meaningful fraction of the page width;
//! a vertical opening does the same for columns. The union of the two
//! openings is the grid skeleton that the cell locator consumes.

use super::morphology::{combine_saturating, open_horizontal, open_vertical};
use crate::core::validation::validate_image_dimensions;
use crate::core::{GridScanError, LineExtractorConfig};
use image::GrayImage;
use tracing::debug;

/// Extracts the table grid from a binary mask.
///
/// Element lengths are derived from the image size: a horizontal element of
/// `width / divisor` pixels and a vertical element of `height / divisor`
/// pixels, each at least one pixel long. Larger divisors keep shorter line
/// segments and so tolerate more broken rulings.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    config: LineExtractorConfig,
}

impl LineExtractor {
    /// Creates a line extractor, rejecting a zero divisor.
    pub fn new(config: LineExtractorConfig) -> Result<Self, GridScanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LineExtractorConfig {
        &self.config
    }

    /// Produces the grid mask containing only structural lines.
    ///
    /// The output is binary and has the same dimensions as the input. Fails
    /// only on masks with a zero dimension.
    pub fn extract(&self, mask: &GrayImage) -> Result<GrayImage, GridScanError> {
        validate_image_dimensions(mask.width(), mask.height())?;

        let horizontal_length = (mask.width() / self.config.divisor).max(1);
        let vertical_length = (mask.height() / self.config.divisor).max(1);

        let horizontal = open_horizontal(mask, horizontal_length);
        let vertical = open_vertical(mask, vertical_length);
        let grid = combine_saturating(&horizontal, &vertical)?;

        debug!(
            target: "lines",
            horizontal_length,
            vertical_length,
            "Extracted structural lines"
        );

        Ok(grid)
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self {
            config: LineExtractorConfig::default(),
        }
    }
}
