//! Cell location on a structural grid mask.
//!
//! The grid mask produced by line extraction encloses each table cell as a
//! background region surrounded by line pixels. Border following over the
//! mask yields those enclosed regions as hole contours, while the table
//! frame itself and any stray ink appear as outer contours. Only the holes
//! are cells.
//!
//! The located boxes are then arranged into reading order. Scanned grids
//! are rarely perfectly axis-aligned, so boxes whose top edges differ by no
//! more than a tolerance are treated as the same row.

use crate::core::LocatorConfig;
use crate::domain::BoundingBox;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use tracing::debug;

/// Locates table cells on a grid mask and orders them row by row.
#[derive(Debug, Clone, Default)]
pub struct CellLocator {
    config: LocatorConfig,
}

impl CellLocator {
    /// Creates a locator with the given row grouping tolerance.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Finds cell bounding boxes and groups them into rows.
    ///
    /// Rows are ordered top to bottom and each row left to right. The box
    /// of a cell spans the enclosing line pixels, so neighboring cells
    /// share their border coordinates. An empty or line-free mask yields no
    /// rows.
    pub fn locate(&self, grid: &GrayImage) -> Vec<Vec<BoundingBox>> {
        if grid.width() == 0 || grid.height() == 0 {
            return Vec::new();
        }

        let contours = find_contours::<u32>(grid);
        let mut boxes: Vec<BoundingBox> = contours
            .iter()
            .filter(|contour| matches!(contour.border_type, BorderType::Hole))
            .filter_map(BoundingBox::from_contour)
            .collect();

        boxes.sort_by(|a, b| a.y.cmp(&b.y).then(a.x.cmp(&b.x)));
        let rows = group_into_rows(boxes, self.config.row_tolerance);

        debug!(
            target: "locate",
            cells = rows.iter().map(Vec::len).sum::<usize>(),
            rows = rows.len(),
            "Located table cells"
        );

        rows
    }
}

/// Groups top-to-bottom sorted boxes into rows.
///
/// The first box of a row fixes the row's reference top edge. A following
/// box joins the row while its top edge exceeds the reference by at most
/// `tolerance` pixels; otherwise it starts a new row and becomes the new
/// reference. Each finished row is ordered left to right.
pub fn group_into_rows(boxes: Vec<BoundingBox>, tolerance: u32) -> Vec<Vec<BoundingBox>> {
    let mut rows: Vec<Vec<BoundingBox>> = Vec::new();
    let mut current: Vec<BoundingBox> = Vec::new();
    let mut reference = 0u32;

    for bounding_box in boxes {
        if current.is_empty() {
            reference = bounding_box.y;
        } else if bounding_box.y > reference.saturating_add(tolerance) {
            rows.push(std::mem::take(&mut current));
            reference = bounding_box.y;
        }
        current.push(bounding_box);
    }
    if !current.is_empty() {
        rows.push(current);
    }

    for row in &mut rows {
        row.sort_by_key(|b| b.x);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn boxes_at(tops: &[(u32, u32)]) -> Vec<BoundingBox> {
        tops.iter()
            .map(|&(x, y)| BoundingBox::new(x, y, 20, 20))
            .collect()
    }

    /// Draws a closed grid of one-pixel lines on a blank mask.
    fn grid_mask(size: u32, xs: &[u32], ys: &[u32]) -> GrayImage {
        let mut mask = GrayImage::new(size, size);
        let (lo_x, hi_x) = (xs[0], xs[xs.len() - 1]);
        let (lo_y, hi_y) = (ys[0], ys[ys.len() - 1]);
        for &y in ys {
            for x in lo_x..=hi_x {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        for &x in xs {
            for y in lo_y..=hi_y {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }

    #[test]
    fn boxes_within_tolerance_share_a_row() {
        let rows = group_into_rows(boxes_at(&[(0, 0), (30, 10)]), 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn box_just_past_tolerance_starts_a_row() {
        let rows = group_into_rows(boxes_at(&[(0, 0), (30, 11)]), 10);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn reference_resets_only_on_new_rows() {
        // The middle box joins row one without moving its reference, so the
        // third box is measured against y = 0 and splits off.
        let rows = group_into_rows(boxes_at(&[(0, 0), (30, 8), (60, 16)]), 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn rows_are_ordered_left_to_right() {
        let rows = group_into_rows(boxes_at(&[(10, 0), (50, 5), (30, 9)]), 10);
        assert_eq!(rows.len(), 1);
        let xs: Vec<u32> = rows[0].iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![10, 30, 50]);
    }

    #[test]
    fn no_boxes_yield_no_rows() {
        assert!(group_into_rows(Vec::new(), 10).is_empty());
    }

    #[test]
    fn blank_mask_yields_no_cells() {
        let locator = CellLocator::default();
        assert!(locator.locate(&GrayImage::new(50, 50)).is_empty());
    }

    #[test]
    fn zero_dimension_mask_yields_no_cells() {
        let locator = CellLocator::default();
        assert!(locator.locate(&GrayImage::new(0, 50)).is_empty());
    }

    #[test]
    fn two_by_two_grid_yields_two_rows_of_two_cells() {
        let mask = grid_mask(100, &[10, 50, 90], &[10, 50, 90]);
        let rows = CellLocator::default().locate(&mask);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 2);

        // Cell boxes span the enclosing lines.
        assert_eq!(rows[0][0], BoundingBox::new(10, 10, 41, 41));
        assert_eq!(rows[0][1], BoundingBox::new(50, 10, 41, 41));
        assert_eq!(rows[1][0], BoundingBox::new(10, 50, 41, 41));
        assert_eq!(rows[1][1], BoundingBox::new(50, 50, 41, 41));
    }

    #[test]
    fn solid_noise_inside_a_cell_is_not_a_cell() {
        let mut mask = grid_mask(100, &[10, 50, 90], &[10, 50, 90]);
        for y in 65..72 {
            for x in 65..72 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }

        let rows = CellLocator::default().locate(&mask);
        assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), 4);
    }

    #[test]
    fn uneven_grid_keeps_reading_order() {
        // Second column sits slightly lower, within the tolerance.
        let mut mask = grid_mask(120, &[10, 60], &[10, 60]);
        for y in 14..=64 {
            for x in 60..=110 {
                if y == 14 || y == 64 || x == 60 || x == 110 {
                    mask.put_pixel(x, y, Luma([255]));
                }
            }
        }

        let rows = CellLocator::default().locate(&mask);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert!(rows[0][0].x < rows[0][1].x);
    }
}
