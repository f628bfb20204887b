//! Screen-position classification of OCR lines.
//!
//! This module provides:
//! - Containment tests against fixed screen regions
//! - Text filters (Han script, speaker names, button glyphs)
//! - The per-line category rules and the console frame detector

pub mod frame_type;
pub mod geometry;
pub mod layout;
pub mod line;
pub mod text;

pub use frame_type::FrameTypeDetector;
pub use geometry::{inside_region, inside_region_wh, Rect};
pub use layout::{ChoiceBand, ConsoleMarker, MissionBand, ScreenLayout};
pub use line::LineClassifier;
pub use text::{contains_han_script, has_glyph_confusion, is_known_common_name, normalize_text};
