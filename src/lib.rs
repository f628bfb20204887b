//! Cyberpunk OCR
//!
//! Classifies the Chinese text of game screenshots by screen position.
//! OCR comes from a remote image analysis service; each response is cached
//! next to its screenshot so a screenshot is only ever sent once.

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod ocr;
pub mod paths;

pub use error::{Error, Result};
pub use frame::{build_frame, Category, Frame, FrameBuilder, FrameType};

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Logs a message to stderr and, when the logs directory exists, to the
/// log file, with a timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    eprint!("{}", line);
    let logs_dir = paths::get_logs_dir();
    if !logs_dir.is_dir() {
        return;
    }
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join("cyberpunk_ocr.log"))
    {
        let _ = file.write_all(line.as_bytes());
    }
}
