//! Read-through cache of OCR responses, stored next to each screenshot.
//!
//! The sidecar `<image>.json` holds the raw success body byte-for-byte. It is
//! written once and never invalidated: screenshots do not change after
//! capture, and every remote call is billed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::client::{AiVisionClient, Transport};
use super::model::OcrResponse;
use crate::error::{Error, Result};
use crate::paths::cache_path_for;

/// Reads a cached body, returning `None` when no sidecar exists.
pub fn read_cached(cache_path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(cache_path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(cache_path, e)),
    }
}

/// Writes the raw success body to the sidecar.
pub fn persist(cache_path: &Path, body: &[u8]) -> Result<()> {
    fs::write(cache_path, body).map_err(|e| Error::io(cache_path, e))
}

pub struct OcrResultCache<T: Transport> {
    client: AiVisionClient<T>,
}

impl<T: Transport> OcrResultCache<T> {
    pub fn new(client: AiVisionClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AiVisionClient<T> {
        &self.client
    }

    /// Returns the OCR response for `image_path`, calling the remote service
    /// only when no sidecar exists yet.
    pub fn get(&self, image_path: &Path) -> Result<OcrResponse> {
        let cache_path = cache_path_for(image_path);

        let body = match read_cached(&cache_path)? {
            Some(bytes) => {
                crate::log(&format!("OCR cache hit: {}", cache_path.display()));
                bytes
            }
            None => {
                crate::log(&format!("OCR cache miss: {}", image_path.display()));
                let image = fs::read(image_path).map_err(|e| Error::io(image_path, e))?;
                let body = self.client.analyze(image)?;
                persist(&cache_path, &body)?;
                crate::log(&format!("OCR response cached: {}", cache_path.display()));
                body
            }
        };

        OcrResponse::from_slice(&body)
    }
}
