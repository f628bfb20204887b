//! Containment tests of a bounding quadrilateral against screen rectangles.

use serde::{Deserialize, Serialize};

use crate::ocr::Corners;

/// Axis-aligned screen rectangle given as origin plus size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, corners: &Corners) -> bool {
        inside_region_wh(corners, self.x, self.y, self.width, self.height)
    }
}

/// True when every corner lies strictly inside the rectangle spanned by
/// `(top_left_x, top_left_y)` and `(bottom_right_x, bottom_right_y)`.
///
/// Left edge is checked on corners 1 and 4, right edge on corners 2 and 3,
/// top edge on corners 1 and 2 and bottom edge on corners 3 and 4, which
/// assumes the clockwise-from-top-left ordering the service produces.
pub fn inside_region(
    corners: &Corners,
    top_left_x: f64,
    top_left_y: f64,
    bottom_right_x: f64,
    bottom_right_y: f64,
) -> bool {
    let [x1, y1, x2, y2, x3, y3, x4, y4] = *corners;
    x1 > top_left_x
        && x4 > top_left_x
        && x2 < bottom_right_x
        && x3 < bottom_right_x
        && y1 > top_left_y
        && y2 > top_left_y
        && y3 < bottom_right_y
        && y4 < bottom_right_y
}

/// [`inside_region`] with the rectangle given as origin plus size.
pub fn inside_region_wh(corners: &Corners, x: f64, y: f64, width: f64, height: f64) -> bool {
    inside_region(corners, x, y, x + width, y + height)
}
