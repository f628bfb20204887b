use super::layout::ConsoleMarker;
use crate::error::Result;
use crate::frame::FrameType;
use crate::ocr::OcrResponse;

/// Decides whether a screenshot shows the console overlay.
#[derive(Clone, Debug, Default)]
pub struct FrameTypeDetector {
    marker: ConsoleMarker,
}

impl FrameTypeDetector {
    pub fn new(marker: ConsoleMarker) -> Self {
        Self { marker }
    }

    /// Console when any line is exactly the marker token and sits inside
    /// the header region; Normal otherwise. Stops at the first match.
    ///
    /// Only lines whose text matches the token have their geometry checked,
    /// so a malformed box elsewhere does not affect the result.
    pub fn detect(&self, response: &OcrResponse) -> Result<FrameType> {
        for line in response.lines() {
            if line.content != self.marker.token {
                continue;
            }
            if self.marker.region.contains(&line.corners()?) {
                return Ok(FrameType::Console);
            }
        }
        Ok(FrameType::Normal)
    }
}
