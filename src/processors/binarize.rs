//! Adaptive binarization of scanned pages.
//!
//! Scans rarely have uniform lighting, so a single global threshold either
//! drops faint strokes or floods shaded regions. The binarizer instead
//! compares every pixel against a statistic of its local neighborhood, which
//! tracks illumination gradients across the page.

use crate::core::constants::MASK_FOREGROUND;
use crate::core::validation::validate_image_dimensions;
use crate::core::{BinarizerConfig, GridScanError, ThresholdMethod};
use crate::utils::to_grayscale;
use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

/// Converts a scanned page into a binary ink mask.
///
/// The input is grayscaled, optionally inverted so ink reads as bright, and
/// then thresholded against the local mean (or Gaussian-weighted mean) of a
/// square window around each pixel. A pixel becomes foreground exactly when
/// its intensity is strictly greater than the local statistic minus the
/// configured offset. The output contains only 0 and 255.
#[derive(Debug, Clone)]
pub struct Binarizer {
    config: BinarizerConfig,
}

impl Binarizer {
    /// Creates a binarizer, rejecting configurations with an invalid window.
    pub fn new(config: BinarizerConfig) -> Result<Self, GridScanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &BinarizerConfig {
        &self.config
    }

    /// Produces the binary mask for an image.
    ///
    /// Fails only on images with a zero dimension.
    pub fn binarize(&self, image: &RgbImage) -> Result<GrayImage, GridScanError> {
        validate_image_dimensions(image.width(), image.height())?;

        let mut working = to_grayscale(image);
        if self.config.invert {
            image::imageops::invert(&mut working);
        }

        let mask = match self.config.method {
            ThresholdMethod::Mean => {
                threshold_against_mean(&working, self.config.window_size, self.config.offset)
            }
            ThresholdMethod::Gaussian => {
                threshold_against_gaussian(&working, self.config.window_size, self.config.offset)
            }
        };

        debug!(
            target: "binarize",
            width = image.width(),
            height = image.height(),
            method = ?self.config.method,
            window = self.config.window_size,
            "Binarized image"
        );

        Ok(mask)
    }
}

impl Default for Binarizer {
    fn default() -> Self {
        Self {
            config: BinarizerConfig::default(),
        }
    }
}

/// Thresholds against the arithmetic mean of the clipped window.
///
/// Uses a summed-area table so each window mean is computed in constant
/// time. Windows are clipped at the borders and the mean is taken over the
/// pixels actually inside the image, rounded to the nearest integer.
fn threshold_against_mean(gray: &GrayImage, window: u32, offset: i32) -> GrayImage {
    let (width, height) = gray.dimensions();
    let radius = i64::from(window / 2);
    let raw = gray.as_raw();

    // Summed-area table with a zero row and column at the origin.
    let stride = width as usize + 1;
    let mut integral = vec![0u64; stride * (height as usize + 1)];
    for y in 0..height as usize {
        let mut row_sum = 0u64;
        for x in 0..width as usize {
            row_sum += u64::from(raw[y * width as usize + x]);
            integral[(y + 1) * stride + x + 1] = integral[y * stride + x + 1] + row_sum;
        }
    }

    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let x0 = (i64::from(x) - radius).max(0) as usize;
            let y0 = (i64::from(y) - radius).max(0) as usize;
            let x1 = (i64::from(x) + radius).min(i64::from(width) - 1) as usize + 1;
            let y1 = (i64::from(y) + radius).min(i64::from(height) - 1) as usize + 1;

            let sum = integral[y1 * stride + x1] + integral[y0 * stride + x0]
                - integral[y0 * stride + x1]
                - integral[y1 * stride + x0];
            let count = ((x1 - x0) * (y1 - y0)) as u64;
            let mean = ((sum + count / 2) / count) as i64;

            let value = i64::from(raw[(y * width + x) as usize]);
            if value > mean - i64::from(offset) {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

/// Thresholds against a Gaussian-weighted neighborhood mean.
///
/// The kernel width follows from the window size using the conventional
/// sigma of `0.3 * ((window - 1) * 0.5 - 1) + 0.8`.
fn threshold_against_gaussian(gray: &GrayImage, window: u32, offset: i32) -> GrayImage {
    let sigma = 0.3 * ((window as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let blurred = gaussian_blur_f32(gray, sigma);

    let (width, height) = gray.dimensions();
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = f32::from(gray.get_pixel(x, y).0[0]);
            let local = f32::from(blurred.get_pixel(x, y).0[0]);
            if value > local - offset as f32 {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_page(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn even_window_is_rejected() {
        let config = BinarizerConfig {
            window_size: 8,
            ..Default::default()
        };
        assert!(Binarizer::new(config).is_err());
    }

    #[test]
    fn zero_dimension_image_is_rejected() {
        let binarizer = Binarizer::default();
        let empty = RgbImage::new(0, 32);
        assert!(binarizer.binarize(&empty).is_err());
    }

    #[test]
    fn uniform_page_yields_empty_mask() {
        let binarizer = Binarizer::default();
        let mask = binarizer.binarize(&solid_page(64, 64, 128)).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn dark_stroke_on_white_page_becomes_foreground() {
        let mut page = solid_page(64, 64, 255);
        for y in 30..33 {
            for x in 10..54 {
                page.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }

        let binarizer = Binarizer::default();
        let mask = binarizer.binarize(&page).unwrap();

        assert_eq!(mask.get_pixel(32, 31).0[0], MASK_FOREGROUND);
        assert_eq!(mask.get_pixel(5, 5).0[0], 0);
        assert_eq!(mask.get_pixel(60, 60).0[0], 0);
    }

    #[test]
    fn clean_sheet_keeps_a_white_page_white() {
        let binarizer = Binarizer::new(BinarizerConfig::clean_sheet()).unwrap();
        let mask = binarizer.binarize(&solid_page(48, 48, 255)).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == MASK_FOREGROUND));
    }

    #[test]
    fn clean_sheet_keeps_thin_print_dark() {
        let mut page = solid_page(48, 48, 255);
        for x in 8..40 {
            page.put_pixel(x, 24, Rgb([0, 0, 0]));
        }

        let binarizer = Binarizer::new(BinarizerConfig::clean_sheet()).unwrap();
        let mask = binarizer.binarize(&page).unwrap();

        assert_eq!(mask.get_pixel(24, 24).0[0], 0);
        assert_eq!(mask.get_pixel(24, 5).0[0], MASK_FOREGROUND);
    }

    #[test]
    fn intensity_equal_to_threshold_stays_background() {
        // With a zero offset every pixel of a uniform image sits exactly on
        // the threshold, and the comparison is strict.
        let config = BinarizerConfig {
            offset: 0,
            invert: false,
            ..Default::default()
        };
        let binarizer = Binarizer::new(config).unwrap();
        let mask = binarizer.binarize(&solid_page(32, 32, 100)).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0));
    }
}
