//! The table extraction pipeline.
//!
//! [`GridScan`] wires the processing stages together: binarize the scan,
//! extract the structural lines, locate the cells, recognize each cell
//! crop, and assemble the rectangular [`Table`]. Construction goes through
//! [`GridScanBuilder`], which validates the configuration before any image
//! is touched.

use crate::core::validation::validate_image_dimensions;
use crate::core::{BinarizerConfig, GridScanConfig, GridScanError};
use crate::domain::{BoundingBox, Table};
use crate::processors::{Binarizer, CellLocator, LineExtractor};
use crate::recognition::{CellRecognizer, TesseractRecognizer};
use crate::utils::crop_box;
use image::{DynamicImage, RgbImage};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The assembled extraction pipeline.
///
/// The pipeline owns its stages and shares one recognizer across threads.
/// Failures of individual cell recognitions degrade to empty cells; a scan
/// without any detectable grid yields the empty table. Only malformed input
/// surfaces as an error.
pub struct GridScan {
    binarizer: Binarizer,
    line_extractor: LineExtractor,
    locator: CellLocator,
    recognizer: Arc<dyn CellRecognizer>,
    parallel_threshold: usize,
}

impl GridScan {
    /// Starts a builder around the given recognizer.
    pub fn builder(recognizer: impl CellRecognizer + 'static) -> GridScanBuilder {
        GridScanBuilder::new(recognizer)
    }

    /// Extracts the table from a single scanned image.
    ///
    /// Runs the full stage sequence. Cells are recognized in parallel once
    /// their number exceeds the parallel threshold; the table keeps reading
    /// order either way.
    pub fn extract_table(&self, image: &RgbImage) -> Result<Table, GridScanError> {
        validate_image_dimensions(image.width(), image.height())?;

        let mask = self.binarizer.binarize(image)?;
        let grid = self.line_extractor.extract(&mask)?;
        let cell_rows = self.locator.locate(&grid);

        if cell_rows.is_empty() {
            debug!(target: "pipeline", "No cells located, returning the empty table");
            return Ok(Table::default());
        }

        let table = Table::from_cell_rows(self.recognize_cells(image, &cell_rows));
        info!(
            target: "pipeline",
            rows = table.row_count(),
            columns = table.column_count(),
            "Extracted table"
        );
        Ok(table)
    }

    /// Extracts and concatenates the tables of several scanned images.
    ///
    /// Every image is validated before any is processed, so a malformed
    /// input fails the whole batch without partial work. Images whose scan
    /// yields no table are skipped; the remaining tables concatenate in
    /// input order. Images are processed in parallel once their number
    /// exceeds the parallel threshold. An empty batch yields the empty
    /// table.
    pub fn extract_tables(&self, images: &[RgbImage]) -> Result<Table, GridScanError> {
        for image in images {
            validate_image_dimensions(image.width(), image.height())?;
        }

        let tables: Vec<Table> = if images.len() > self.parallel_threshold {
            images
                .par_iter()
                .map(|image| self.extract_table(image))
                .collect::<Result<_, _>>()?
        } else {
            images
                .iter()
                .map(|image| self.extract_table(image))
                .collect::<Result<_, _>>()?
        };

        Ok(Table::concatenate(tables))
    }

    /// Recognizes every located cell, keeping the row structure.
    ///
    /// A failed recognition logs a warning and contributes an empty cell.
    fn recognize_cells(&self, image: &RgbImage, cell_rows: &[Vec<BoundingBox>]) -> Vec<Vec<String>> {
        let flat: Vec<BoundingBox> = cell_rows.iter().flatten().copied().collect();

        let recognize_one = |bounding_box: &BoundingBox| -> String {
            let crop = DynamicImage::ImageRgb8(crop_box(image, bounding_box));
            match self.recognizer.recognize(&crop) {
                Ok(text) => text,
                Err(error) => {
                    warn!(
                        target: "recognize",
                        %error,
                        x = bounding_box.x,
                        y = bounding_box.y,
                        "Cell recognition failed, substituting empty text"
                    );
                    String::new()
                }
            }
        };

        let texts: Vec<String> = if flat.len() > self.parallel_threshold {
            flat.par_iter().map(recognize_one).collect()
        } else {
            flat.iter().map(recognize_one).collect()
        };

        let mut texts = texts.into_iter();
        cell_rows
            .iter()
            .map(|row| texts.by_ref().take(row.len()).collect())
            .collect()
    }
}

impl fmt::Debug for GridScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridScan")
            .field("binarizer", &self.binarizer)
            .field("line_extractor", &self.line_extractor)
            .field("locator", &self.locator)
            .field("parallel_threshold", &self.parallel_threshold)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GridScan`].
///
/// Starts from the default configuration; the `with_` methods override
/// individual stage parameters. [`GridScanBuilder::build`] validates the
/// final configuration.
pub struct GridScanBuilder {
    config: GridScanConfig,
    recognizer: Arc<dyn CellRecognizer>,
}

impl GridScanBuilder {
    /// Creates a builder with the default configuration.
    pub fn new(recognizer: impl CellRecognizer + 'static) -> Self {
        Self {
            config: GridScanConfig::default(),
            recognizer: Arc::new(recognizer),
        }
    }

    /// Creates a builder around an already shared recognizer.
    pub fn from_shared(recognizer: Arc<dyn CellRecognizer>) -> Self {
        Self {
            config: GridScanConfig::default(),
            recognizer,
        }
    }

    /// Creates a builder from a configuration, including its recognizer.
    ///
    /// The `ocr` section selects and parameterizes the Tesseract binary.
    pub fn from_config(config: GridScanConfig) -> Self {
        let recognizer = TesseractRecognizer::from_config(&config.ocr);
        Self {
            recognizer: Arc::new(recognizer),
            config,
        }
    }

    /// Replaces the stage configuration, keeping the current recognizer.
    pub fn with_config(mut self, config: GridScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the binarizer configuration.
    pub fn with_binarizer_config(mut self, config: BinarizerConfig) -> Self {
        self.config.binarizer = config;
        self
    }

    /// Sets the adaptive threshold window side length.
    pub fn with_threshold_window(mut self, window_size: u32) -> Self {
        self.config.binarizer.window_size = window_size;
        self
    }

    /// Sets the adaptive threshold offset.
    pub fn with_threshold_offset(mut self, offset: i32) -> Self {
        self.config.binarizer.offset = offset;
        self
    }

    /// Sets the divisor deriving structural element lengths.
    pub fn with_line_divisor(mut self, divisor: u32) -> Self {
        self.config.lines.divisor = divisor;
        self
    }

    /// Sets the row grouping tolerance in pixels.
    pub fn with_row_tolerance(mut self, tolerance: u32) -> Self {
        self.config.locator.row_tolerance = tolerance;
        self
    }

    /// Sets the work item count above which stages run in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Validates the configuration and assembles the pipeline.
    pub fn build(self) -> Result<GridScan, GridScanError> {
        self.config.validate()?;
        Ok(GridScan {
            binarizer: Binarizer::new(self.config.binarizer)?,
            line_extractor: LineExtractor::new(self.config.lines)?,
            locator: CellLocator::new(self.config.locator),
            recognizer: self.recognizer,
            parallel_threshold: self.config.parallel_threshold,
        })
    }
}
