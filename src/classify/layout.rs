//! Screen regions of the game UI at the reference capture resolution.
//!
//! Defaults are tuned against 3840x2160 screenshots; every value can be
//! overridden from the `layout` section of config.json.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Mission objective banner: a vertical strip anchored to a fixed x.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionBand {
    /// Expected x of the top-left corner
    pub anchor_x: f64,
    /// Allowed distance from `anchor_x`
    pub tolerance: f64,
    /// Top-left y must be greater than this
    pub min_top_y: f64,
    /// Bottom-left y must be less than this
    pub max_bottom_y: f64,
}

impl Default for MissionBand {
    fn default() -> Self {
        Self {
            anchor_x: 3044.0,
            tolerance: 100.0,
            min_top_y: 700.0,
            max_bottom_y: 1300.0,
        }
    }
}

/// Dialogue choice list: a horizontal band around a fixed y.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceBand {
    /// Expected y of the top-left corner
    pub anchor_y: f64,
    /// Allowed distance from `anchor_y`
    pub tolerance: f64,
    /// Top-left x must be greater than this
    pub min_left_x: f64,
    /// Top-right x must be less than this
    pub max_right_x: f64,
}

impl Default for ChoiceBand {
    fn default() -> Self {
        Self {
            anchor_y: 1500.0,
            tolerance: 200.0,
            min_left_x: 1000.0,
            max_right_x: 3000.0,
        }
    }
}

/// Token and header area that identify the in-game console overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleMarker {
    pub token: String,
    pub region: Rect,
}

impl Default for ConsoleMarker {
    fn default() -> Self {
        Self {
            token: "消息".to_string(),
            region: Rect::new(693.0, 435.0, 150.0, 78.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenLayout {
    pub mission: MissionBand,
    pub choice: ChoiceBand,
    /// Subtitle strip
    pub dialogue: Rect,
    pub console: ConsoleMarker,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            mission: MissionBand::default(),
            choice: ChoiceBand::default(),
            dialogue: Rect::new(900.0, 1700.0, 2100.0, 400.0),
            console: ConsoleMarker::default(),
        }
    }
}
