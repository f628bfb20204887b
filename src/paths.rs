use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static EXE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Suffix appended to a screenshot path to name its cached OCR response.
pub const CACHE_SUFFIX: &str = ".json";

/// Returns the directory containing the executable.
pub fn get_exe_dir() -> &'static PathBuf {
    EXE_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Returns the logs directory: `<exe_dir>/logs/`
pub fn get_logs_dir() -> PathBuf {
    get_exe_dir().join("logs")
}

/// Returns the default config file: `<exe_dir>/config.json`
pub fn get_config_path() -> PathBuf {
    get_exe_dir().join("config.json")
}

/// Returns the sidecar cache file for a screenshot: `<image_path>.json`
///
/// The suffix is appended to the full file name, so `shot.jpeg` maps to
/// `shot.jpeg.json` rather than replacing the extension.
pub fn cache_path_for(image_path: &Path) -> PathBuf {
    let mut name = OsString::from(image_path.as_os_str());
    name.push(CACHE_SUFFIX);
    PathBuf::from(name)
}
