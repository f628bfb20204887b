use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of coordinates in a bounding quadrilateral.
pub const BOX_COORDS: usize = 8;

/// Quadrilateral corners in screen pixels, clockwise from top-left:
/// `[x1, y1, x2, y2, x3, y3, x4, y4]`.
///
/// Kept as the service sends it; use [`BoundingBox::corners`] before any
/// geometry so short boxes surface as an error instead of a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox(pub Vec<f64>);

/// Fixed-size view of a validated bounding box.
pub type Corners = [f64; BOX_COORDS];

impl BoundingBox {
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Self(coords.into())
    }

    /// Returns the first eight coordinates, or an error naming the line when
    /// fewer are present.
    pub fn corners(&self, content: &str) -> Result<Corners> {
        match self.0.get(..BOX_COORDS) {
            Some(slice) => {
                let mut corners = [0.0; BOX_COORDS];
                corners.copy_from_slice(slice);
                Ok(corners)
            }
            None => Err(Error::MalformedBoundingBox {
                content: content.to_string(),
                len: self.0.len(),
            }),
        }
    }
}

/// One recognized text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub content: String,
    pub bounding_box: BoundingBox,
}

impl Line {
    pub fn new(content: impl Into<String>, bounding_box: impl Into<Vec<f64>>) -> Self {
        Self {
            content: content.into(),
            bounding_box: BoundingBox::new(bounding_box),
        }
    }

    pub fn corners(&self) -> Result<Corners> {
        self.bounding_box.corners(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadResult {
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// Parsed success body of the image analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    pub read_result: ReadResult,
}

impl OcrResponse {
    /// All lines of all pages, in source order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.read_result.pages.iter().flat_map(|page| page.lines.iter())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
