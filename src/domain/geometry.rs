//! Geometric types for locating table cells.
//!
//! The locator works with axis-aligned bounding boxes in image coordinates:
//! top-left origin, `y` growing downward. Boxes are produced from contours,
//! consumed to crop cell images, and then discarded.

use imageproc::contours::Contour;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box with top-left origin.
///
/// Width and height are always at least 1 for boxes built from contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost column covered by the box.
    pub x: u32,
    /// Topmost row covered by the box.
    pub y: u32,
    /// Horizontal extent in pixels.
    pub width: u32,
    /// Vertical extent in pixels.
    pub height: u32,
}

impl BoundingBox {
    /// Creates a new BoundingBox from its top-left corner and extent.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a BoundingBox enclosing all points of a contour.
    ///
    /// Returns `None` for a contour without points.
    pub fn from_contour(contour: &Contour<u32>) -> Option<Self> {
        let first = contour.points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for point in &contour.points[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    /// The leftmost column covered by the box.
    pub fn left(&self) -> u32 {
        self.x
    }

    /// The topmost row covered by the box.
    pub fn top(&self) -> u32 {
        self.y
    }

    /// One past the rightmost column covered by the box.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottommost row covered by the box.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// The covered area in pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::contours::BorderType;
    use imageproc::point::Point;

    fn contour_of(points: &[(u32, u32)]) -> Contour<u32> {
        Contour {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            border_type: BorderType::Outer,
            parent: None,
        }
    }

    #[test]
    fn from_contour_encloses_all_points() {
        let contour = contour_of(&[(4, 7), (9, 7), (9, 12), (4, 12)]);
        let bbox = BoundingBox::from_contour(&contour).unwrap();
        assert_eq!(bbox, BoundingBox::new(4, 7, 6, 6));
        assert_eq!(bbox.right(), 10);
        assert_eq!(bbox.bottom(), 13);
    }

    #[test]
    fn from_contour_single_point_has_unit_extent() {
        let contour = contour_of(&[(3, 5)]);
        let bbox = BoundingBox::from_contour(&contour).unwrap();
        assert_eq!(bbox.width, 1);
        assert_eq!(bbox.height, 1);
        assert_eq!(bbox.area(), 1);
    }

    #[test]
    fn from_contour_empty_is_none() {
        let contour = contour_of(&[]);
        assert!(BoundingBox::from_contour(&contour).is_none());
    }
}
