//! Utility functions for image handling.
//!
//! This module provides the conversions the pipeline stages need: collapsing
//! a color image to single-channel intensity and cropping a located cell out
//! of the source image.

use crate::domain::BoundingBox;
use image::{imageops, GrayImage, RgbImage};

/// Converts a color image to single-channel intensity.
///
/// # Arguments
///
/// * `image` - The color image to convert
///
/// # Returns
///
/// * `GrayImage` - The luma image with the same dimensions
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    imageops::grayscale(image)
}

/// Crops the region covered by a bounding box out of an image.
///
/// The region is clipped to the image bounds, so a box produced from a mask
/// with the same dimensions always crops cleanly.
///
/// # Arguments
///
/// * `image` - The source image
/// * `bbox` - The region to cut out
///
/// # Returns
///
/// * `RgbImage` - An owned copy of the covered pixels
pub fn crop_box(image: &RgbImage, bbox: &BoundingBox) -> RgbImage {
    imageops::crop_imm(image, bbox.x, bbox.y, bbox.width, bbox.height).to_image()
}
