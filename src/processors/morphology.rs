//! Directional morphological operations on binary masks.
//!
//! These primitives probe a mask with one-pixel-thick line elements: a
//! horizontal element of a given length, or its vertical counterpart.
//! Eroding with such an element keeps only pixels whose entire window is
//! foreground, which erases every run shorter than the element; dilating
//! with the mirrored element grows the survivors back to their original
//! extent. The erode-then-dilate composition (opening) therefore acts as a
//! run-length filter: runs at least as long as the element are restored
//! exactly, shorter runs vanish.
//!
//! Foreground is any nonzero pixel; outputs contain only 0 and 255. Pixels
//! beyond the image border count as background.

use crate::core::constants::MASK_FOREGROUND;
use crate::core::GridScanError;
use image::{GrayImage, Luma};

/// Splits an element length into the pixels before and after the anchor.
///
/// The anchor sits at the element center, rounded down, so an element of
/// length `k` spans `k / 2` pixels ahead of the anchor and the rest behind.
fn window_split(length: u32) -> (u32, u32) {
    let anchor = length / 2;
    (anchor, length - 1 - anchor)
}

/// Erodes a mask with a horizontal line element.
///
/// A pixel stays foreground only when every pixel of the element window on
/// its row is foreground and the window lies fully inside the image. An
/// element length of 0 is treated as 1.
pub fn erode_horizontal(mask: &GrayImage, length: u32) -> GrayImage {
    let length = length.max(1);
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let (lead, trail) = window_split(length);
    let raw = mask.as_raw();
    let mut prefix = vec![0u32; width as usize + 1];

    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width as usize {
            prefix[x + 1] = prefix[x] + u32::from(raw[row + x] != 0);
        }
        for x in 0..width {
            if x < lead {
                continue;
            }
            let hi = x + trail;
            if hi >= width {
                continue;
            }
            let lo = x - lead;
            if prefix[(hi + 1) as usize] - prefix[lo as usize] == length {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

/// Dilates a mask with a horizontal line element.
///
/// A pixel becomes foreground when any pixel of the mirrored element window
/// on its row is foreground. The window is clipped to the image. An element
/// length of 0 is treated as 1.
pub fn dilate_horizontal(mask: &GrayImage, length: u32) -> GrayImage {
    let length = length.max(1);
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    // Mirrored anchor, so dilation after erosion restores runs in place.
    let (trail, lead) = window_split(length);
    let raw = mask.as_raw();
    let mut prefix = vec![0u32; width as usize + 1];

    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width as usize {
            prefix[x + 1] = prefix[x] + u32::from(raw[row + x] != 0);
        }
        for x in 0..width {
            let lo = x.saturating_sub(lead);
            let hi = (x + trail).min(width - 1);
            if prefix[(hi + 1) as usize] - prefix[lo as usize] > 0 {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

/// Erodes a mask with a vertical line element.
///
/// Symmetric to [`erode_horizontal`], operating on columns.
pub fn erode_vertical(mask: &GrayImage, length: u32) -> GrayImage {
    let length = length.max(1);
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let (lead, trail) = window_split(length);
    let raw = mask.as_raw();
    let mut prefix = vec![0u32; height as usize + 1];

    for x in 0..width {
        for y in 0..height as usize {
            let idx = y * width as usize + x as usize;
            prefix[y + 1] = prefix[y] + u32::from(raw[idx] != 0);
        }
        for y in 0..height {
            if y < lead {
                continue;
            }
            let hi = y + trail;
            if hi >= height {
                continue;
            }
            let lo = y - lead;
            if prefix[(hi + 1) as usize] - prefix[lo as usize] == length {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

/// Dilates a mask with a vertical line element.
///
/// Symmetric to [`dilate_horizontal`], operating on columns.
pub fn dilate_vertical(mask: &GrayImage, length: u32) -> GrayImage {
    let length = length.max(1);
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let (trail, lead) = window_split(length);
    let raw = mask.as_raw();
    let mut prefix = vec![0u32; height as usize + 1];

    for x in 0..width {
        for y in 0..height as usize {
            let idx = y * width as usize + x as usize;
            prefix[y + 1] = prefix[y] + u32::from(raw[idx] != 0);
        }
        for y in 0..height {
            let lo = y.saturating_sub(lead);
            let hi = (y + trail).min(height - 1);
            if prefix[(hi + 1) as usize] - prefix[lo as usize] > 0 {
                out.put_pixel(x, y, Luma([MASK_FOREGROUND]));
            }
        }
    }
    out
}

/// Opens a mask with a horizontal line element: erode, then dilate.
///
/// Keeps exactly the horizontal runs at least `length` pixels long.
pub fn open_horizontal(mask: &GrayImage, length: u32) -> GrayImage {
    dilate_horizontal(&erode_horizontal(mask, length), length)
}

/// Opens a mask with a vertical line element: erode, then dilate.
///
/// Keeps exactly the vertical runs at least `length` pixels long.
pub fn open_vertical(mask: &GrayImage, length: u32) -> GrayImage {
    dilate_vertical(&erode_vertical(mask, length), length)
}

/// Combines two masks by pixelwise saturating addition.
///
/// On strictly binary inputs this is a union. The masks must share
/// dimensions.
pub fn combine_saturating(a: &GrayImage, b: &GrayImage) -> Result<GrayImage, GridScanError> {
    if a.dimensions() != b.dimensions() {
        return Err(GridScanError::invalid_input(format!(
            "Mask dimensions differ: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    Ok(GrayImage::from_fn(a.width(), a.height(), |x, y| {
        Luma([a.get_pixel(x, y).0[0].saturating_add(b.get_pixel(x, y).0[0])])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a mask from rows of `#` (foreground) and `.` (background).
    fn mask_from_rows(rows: &[&str]) -> GrayImage {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut mask = GrayImage::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len() as u32, width, "ragged test mask");
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    mask.put_pixel(x as u32, y as u32, Luma([255]));
                }
            }
        }
        mask
    }

    fn rows_from_mask(mask: &GrayImage) -> Vec<String> {
        (0..mask.height())
            .map(|y| {
                (0..mask.width())
                    .map(|x| if mask.get_pixel(x, y).0[0] != 0 { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn opening_removes_short_runs_and_restores_long_ones() {
        let mask = mask_from_rows(&[
            "..########..",
            "....###.....",
            "............",
        ]);
        let opened = open_horizontal(&mask, 8);
        assert_eq!(
            rows_from_mask(&opened),
            vec!["..########..", "............", "............"]
        );
    }

    #[test]
    fn opening_with_length_one_is_identity() {
        let mask = mask_from_rows(&["#..#", ".##.", "...."]);
        let opened = open_horizontal(&mask, 1);
        assert_eq!(rows_from_mask(&opened), rows_from_mask(&mask));
    }

    #[test]
    fn opening_restores_even_length_runs_in_place() {
        let mask = mask_from_rows(&["..####...."]);
        let opened = open_horizontal(&mask, 4);
        assert_eq!(rows_from_mask(&opened), vec!["..####...."]);
    }

    #[test]
    fn full_width_line_survives_opening() {
        let mask = mask_from_rows(&["############", "............"]);
        let opened = open_horizontal(&mask, 5);
        assert_eq!(
            rows_from_mask(&opened),
            vec!["############", "............"]
        );
    }

    #[test]
    fn vertical_opening_keeps_columns_not_rows() {
        let mask = mask_from_rows(&[
            "#..#....",
            "#..#....",
            "#.......",
            "#..#####",
            "#.......",
        ]);
        let opened = open_vertical(&mask, 5);
        assert_eq!(
            rows_from_mask(&opened),
            vec!["#.......", "#.......", "#.......", "#.......", "#......."]
        );
    }

    #[test]
    fn erode_keeps_only_fully_covered_centers() {
        let mask = mask_from_rows(&[".###."]);
        let eroded = erode_horizontal(&mask, 3);
        assert_eq!(rows_from_mask(&eroded), vec!["..#.."]);
    }

    #[test]
    fn dilate_grows_single_pixel_to_element_length() {
        let mask = mask_from_rows(&["...#..."]);
        let dilated = dilate_horizontal(&mask, 3);
        assert_eq!(rows_from_mask(&dilated), vec!["..###.."]);
    }

    #[test]
    fn element_longer_than_image_erases_everything() {
        let mask = mask_from_rows(&["####"]);
        let opened = open_horizontal(&mask, 9);
        assert_eq!(rows_from_mask(&opened), vec!["...."]);
    }

    #[test]
    fn combine_is_union_on_binary_masks() {
        let a = mask_from_rows(&["##..", "...."]);
        let b = mask_from_rows(&[".##.", "#..."]);
        let combined = combine_saturating(&a, &b).unwrap();
        assert_eq!(rows_from_mask(&combined), vec!["###.", "#..."]);
        // Overlap saturates instead of wrapping.
        assert_eq!(combined.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn combine_rejects_mismatched_dimensions() {
        let a = GrayImage::new(4, 4);
        let b = GrayImage::new(3, 4);
        assert!(combine_saturating(&a, &b).is_err());
    }

    #[test]
    fn nonzero_input_values_count_as_foreground() {
        let mut mask = GrayImage::new(5, 1);
        for x in 0..5 {
            mask.put_pixel(x, 0, Luma([1]));
        }
        let opened = open_horizontal(&mask, 5);
        assert_eq!(rows_from_mask(&opened), vec!["#####"]);
        // Output is normalized to full foreground.
        assert_eq!(opened.get_pixel(2, 0).0[0], 255);
    }
}
