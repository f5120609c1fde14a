//! Constants used throughout the table extraction pipeline.
//!
//! This module defines the default values for the tunable parameters of the
//! pipeline stages (binarization, line extraction, cell grouping), the
//! parallelism threshold, and the settings of the bundled tesseract adapter.

/// The pixel value used for foreground in binary masks.
///
/// Every mask produced by the pipeline stages uses exactly this value
/// for pixels that belong to ink, lines, or detected structure.
pub const MASK_FOREGROUND: u8 = 255;

/// The pixel value used for background in binary masks.
pub const MASK_BACKGROUND: u8 = 0;

/// The default window size for adaptive thresholding.
///
/// This constant defines the side length of the square neighborhood a
/// pixel is compared against. It must be odd.
pub const DEFAULT_THRESHOLD_WINDOW: u32 = 15;

/// The minimum accepted window size for adaptive thresholding.
pub const MIN_THRESHOLD_WINDOW: u32 = 3;

/// The default offset subtracted from the local mean during thresholding.
///
/// A negative offset raises the effective threshold, which suppresses
/// low-contrast shading around strokes.
pub const DEFAULT_THRESHOLD_OFFSET: i32 = -2;

/// The window size used by the clean-sheet binarization preset.
pub const CLEAN_SHEET_WINDOW: u32 = 11;

/// The offset used by the clean-sheet binarization preset.
pub const CLEAN_SHEET_OFFSET: i32 = 2;

/// The default divisor for sizing structural line elements.
///
/// This constant defines the fraction of an image dimension a stroke must
/// span to count as a grid line: the structuring element is
/// `dimension / divisor` pixels long, so smaller divisors demand longer
/// lines.
pub const DEFAULT_LINE_DIVISOR: u32 = 30;

/// The default row-grouping tolerance in pixels.
///
/// This constant defines how far a box top may sit below the first box of
/// a row and still belong to that row.
pub const DEFAULT_ROW_TOLERANCE: u32 = 10;

/// The default threshold for parallel processing.
///
/// This constant defines the minimum number of items that need
/// to be processed before parallel processing is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// The default tesseract page segmentation mode.
///
/// Mode 6 assumes a single uniform block of text, which fits the content
/// of an individual table cell.
pub const DEFAULT_TESSERACT_PSM: u32 = 6;

/// The environment variable consulted for the tesseract binary path.
///
/// When set, it overrides lookup on `PATH`; an explicit configured path
/// overrides both.
pub const TESSERACT_CMD_ENV: &str = "TESSERACT_CMD";

/// The default name of the tesseract binary.
pub const DEFAULT_TESSERACT_BINARY: &str = "tesseract";
