//! Client for the remote image analysis (read) endpoint.
//!
//! The HTTP exchange sits behind [`Transport`] so the client can be driven
//! by a fake in tests. [`AiVisionClient::analyze`] returns the raw success
//! body untouched; callers persist it before parsing.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Request path and fixed query appended to the configured endpoint.
const ANALYZE_PATH: &str = "/computervision/imageanalysis:analyze?features=read&model-version=latest&language=zh-Hans&api-version=2023-02-01-preview";

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const CONTENT_TYPE: &str = "application/octet-stream";

/// A fully formed analyze call.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub url: String,
    pub subscription_key: String,
    pub body: Vec<u8>,
}

/// Status and complete body of a finished HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one blocking POST. Implementations must not retry.
pub trait Transport {
    fn post(&self, request: &AnalyzeRequest) -> Result<RawResponse>;
}

/// Production transport backed by a blocking reqwest client with its
/// default timeouts.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn post(&self, request: &AnalyzeRequest) -> Result<RawResponse> {
        let response = self
            .client
            .post(&request.url)
            .header(SUBSCRIPTION_KEY_HEADER, &request.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(request.body.clone())
            .send()?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

/// Turns a non-200 body into [`Error::Remote`], or [`Error::Decode`] when the
/// body is not a well-formed error envelope.
pub fn decode_error_envelope(body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::Remote {
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(e) => Error::Decode(e),
    }
}

pub struct AiVisionClient<T: Transport> {
    transport: T,
    endpoint: String,
    subscription_key: String,
}

impl AiVisionClient<ReqwestTransport> {
    pub fn new(endpoint: &str, subscription_key: &str) -> Self {
        Self::with_transport(ReqwestTransport::new(), endpoint, subscription_key)
    }
}

impl<T: Transport> AiVisionClient<T> {
    pub fn with_transport(transport: T, endpoint: &str, subscription_key: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription_key: subscription_key.to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.endpoint, ANALYZE_PATH)
    }

    /// Sends the image bytes and returns the raw 200 body.
    pub fn analyze(&self, image: Vec<u8>) -> Result<Vec<u8>> {
        if self.endpoint.is_empty() {
            return Err(Error::Config(
                "vision endpoint is not configured (set AZURE_VISION_ENDPOINT or config.json \"endpoint\")"
                    .to_string(),
            ));
        }

        let request = AnalyzeRequest {
            url: self.analyze_url(),
            subscription_key: self.subscription_key.clone(),
            body: image,
        };

        crate::log(&format!(
            "Calling vision service ({} bytes)",
            request.body.len()
        ));
        let response = self.transport.post(&request)?;

        if response.status != 200 {
            return Err(decode_error_envelope(&response.body));
        }
        Ok(response.body)
    }
}
