pub mod cache;
pub mod client;
pub mod model;

pub use cache::OcrResultCache;
pub use client::{AiVisionClient, AnalyzeRequest, RawResponse, ReqwestTransport, Transport};
pub use model::{BoundingBox, Corners, Line, OcrResponse, Page, ReadResult};
