//! Output of parsed frames for downstream tooling.
//!
//! - Frame-training CSV: one `filename,frameType` row per screenshot
//! - Dialogue transcript: subtitle lines of normal frames, each printed once

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::classify::normalize_text;
use crate::frame::{Category, Frame, FrameType};

/// Quotes a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes one training row: `filename,frameType`.
pub fn write_frame_type_row<W: Write>(out: &mut W, image_path: &Path, frame: &Frame) -> Result<()> {
    writeln!(
        out,
        "{},{}",
        csv_field(&image_path.display().to_string()),
        frame.frame_type()
    )
    .context("Failed to write CSV row")?;
    Ok(())
}

/// Collects subtitle lines across screenshots, keeping first occurrences.
#[derive(Debug, Default)]
pub struct DialogueLog {
    seen: HashSet<String>,
}

impl DialogueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dialogue lines of `frame` not seen before, in order.
    /// Console frames contribute nothing.
    pub fn new_lines(&mut self, frame: &Frame) -> Vec<String> {
        if frame.frame_type() != FrameType::Normal {
            return Vec::new();
        }

        let mut fresh = Vec::new();
        for line in frame.lines(Category::Dialogue) {
            if self.seen.insert(normalize_text(&line.content)) {
                fresh.push(line.content.clone());
            }
        }
        fresh
    }
}
