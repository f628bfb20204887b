//! Assigns a [`Category`] to a single OCR line.
//!
//! Rules are evaluated top to bottom and the first match wins. Geometry
//! decides almost everything because the UI layout is fixed; the text
//! filters only break ties in the choice band, where speaker names and
//! button glyphs share the position of real choices.

use super::geometry::inside_region;
use super::layout::ScreenLayout;
use super::text::{contains_han_script, has_glyph_confusion, is_known_common_name};
use crate::error::Result;
use crate::frame::Category;
use crate::ocr::{Corners, Line};

/// Rule predicate over the layout, the line text and its validated corners.
pub type Predicate = fn(&ScreenLayout, &str, &Corners) -> bool;

/// Classification order. Lines matching none of these are [`Category::Other`].
pub const RULES: [(Category, Predicate); 3] = [
    (Category::Mission, is_mission),
    (Category::Choice, is_choice),
    (Category::Dialogue, is_dialogue),
];

/// Top-left x near the banner anchor, inside the banner's vertical strip.
pub fn is_mission(layout: &ScreenLayout, _content: &str, corners: &Corners) -> bool {
    let band = &layout.mission;
    (corners[0] - band.anchor_x).abs() < band.tolerance
        && corners[1] > band.min_top_y
        && corners[7] < band.max_bottom_y
}

/// Inside the choice band and reads like Chinese choice text.
pub fn is_choice(layout: &ScreenLayout, content: &str, corners: &Corners) -> bool {
    let band = &layout.choice;
    let in_band = (corners[1] - band.anchor_y).abs() < band.tolerance
        && corners[0] > band.min_left_x
        && corners[2] < band.max_right_x;

    in_band
        && contains_han_script(content)
        && !is_known_common_name(content)
        && !has_glyph_confusion(content)
}

/// Fully inside the subtitle strip.
pub fn is_dialogue(layout: &ScreenLayout, _content: &str, corners: &Corners) -> bool {
    let region = &layout.dialogue;
    inside_region(
        corners,
        region.x,
        region.y,
        region.x + region.width,
        region.y + region.height,
    )
}

#[derive(Clone, Debug, Default)]
pub struct LineClassifier {
    layout: ScreenLayout,
}

impl LineClassifier {
    pub fn new(layout: ScreenLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Fails only when the line's bounding box has fewer than 8 coordinates.
    pub fn classify(&self, line: &Line) -> Result<Category> {
        let corners = line.corners()?;
        let category = RULES
            .iter()
            .find(|(_, matches)| matches(&self.layout, &line.content, &corners))
            .map(|&(category, _)| category)
            .unwrap_or(Category::Other);
        Ok(category)
    }
}
