//! Configuration types for the table extraction pipeline.
//!
//! Every tunable named by the pipeline stages lives here: the adaptive
//! threshold window and offset, the structural line divisor, the row-grouping
//! tolerance, and the settings handed to the bundled tesseract adapter. All
//! structs deserialize with defaults so a config file only needs to name the
//! fields it overrides.

use crate::core::constants::{
    CLEAN_SHEET_OFFSET, CLEAN_SHEET_WINDOW, DEFAULT_LINE_DIVISOR, DEFAULT_PARALLEL_THRESHOLD,
    DEFAULT_ROW_TOLERANCE, DEFAULT_TESSERACT_PSM, DEFAULT_THRESHOLD_OFFSET,
    DEFAULT_THRESHOLD_WINDOW, MIN_THRESHOLD_WINDOW,
};
use crate::core::validation::{validate_positive, validate_threshold_window};
use crate::core::GridScanError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The neighborhood statistic a pixel is compared against during
/// adaptive thresholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMethod {
    /// Arithmetic mean of the window.
    #[default]
    Mean,
    /// Gaussian-weighted mean of the window.
    Gaussian,
}

/// Configuration for the binarization stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizerConfig {
    /// Neighborhood statistic used for thresholding. Default: mean.
    pub method: ThresholdMethod,
    /// Side length of the square threshold neighborhood, must be odd.
    /// Default: 15.
    pub window_size: u32,
    /// Offset subtracted from the neighborhood statistic. Default: -2.
    pub offset: i32,
    /// Whether to invert intensities before thresholding, so ink becomes
    /// the foreground. Default: true.
    pub invert: bool,
}

impl Default for BinarizerConfig {
    fn default() -> Self {
        Self {
            method: ThresholdMethod::Mean,
            window_size: DEFAULT_THRESHOLD_WINDOW,
            offset: DEFAULT_THRESHOLD_OFFSET,
            invert: true,
        }
    }
}

impl BinarizerConfig {
    /// Preset for whitening a scanned sheet rather than isolating ink.
    ///
    /// Uses a Gaussian-weighted mean with a small window, a positive offset,
    /// and no inversion, so a page stays white and print stays dark.
    pub fn clean_sheet() -> Self {
        Self {
            method: ThresholdMethod::Gaussian,
            window_size: CLEAN_SHEET_WINDOW,
            offset: CLEAN_SHEET_OFFSET,
            invert: false,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridScanError> {
        validate_threshold_window(self.window_size, MIN_THRESHOLD_WINDOW)
    }
}

/// Configuration for the structural line extraction stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineExtractorConfig {
    /// Divisor applied to each image dimension to size the structuring
    /// elements: a stroke must span at least `dimension / divisor` pixels
    /// to survive as a line. Default: 30.
    pub divisor: u32,
}

impl Default for LineExtractorConfig {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_LINE_DIVISOR,
        }
    }
}

impl LineExtractorConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridScanError> {
        validate_positive(self.divisor, "divisor")
    }
}

/// Configuration for the cell locating stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// How far, in pixels, a box top may sit below the first box of a row
    /// and still join that row. Default: 10.
    pub row_tolerance: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            row_tolerance: DEFAULT_ROW_TOLERANCE,
        }
    }
}

/// Configuration for the bundled tesseract recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseractConfig {
    /// Explicit path to the tesseract binary. When absent, the
    /// `TESSERACT_CMD` environment variable is consulted, then `PATH`.
    pub binary_path: Option<PathBuf>,
    /// Language passed as `-l`. When absent, tesseract's default applies.
    pub language: Option<String>,
    /// Page segmentation mode passed as `--psm`. Default: 6.
    pub psm: u32,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            binary_path: None,
            language: None,
            psm: DEFAULT_TESSERACT_PSM,
        }
    }
}

/// Top-level configuration for the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridScanConfig {
    /// Binarization settings.
    pub binarizer: BinarizerConfig,
    /// Structural line extraction settings.
    pub lines: LineExtractorConfig,
    /// Cell locating settings.
    pub locator: LocatorConfig,
    /// Settings for the bundled tesseract recognizer.
    pub ocr: TesseractConfig,
    /// Minimum number of images or cells before work is parallelized.
    /// Default: 4.
    pub parallel_threshold: usize,
}

impl Default for GridScanConfig {
    fn default() -> Self {
        Self {
            binarizer: BinarizerConfig::default(),
            lines: LineExtractorConfig::default(),
            locator: LocatorConfig::default(),
            ocr: TesseractConfig::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl GridScanConfig {
    /// Validates every stage configuration.
    pub fn validate(&self) -> Result<(), GridScanError> {
        self.binarizer.validate()?;
        self.lines.validate()?;
        Ok(())
    }
}
