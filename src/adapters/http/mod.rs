//! HTTP verdict transport
//!
//! Speaks the verdict endpoint protocol: POST a JSON `{"url": ...}` body to
//! the endpoint address, expect a 2xx JSON response with `verdict` and
//! `reason` fields. The transport applies no timeout of its own - the
//! client bounds each attempt and cancels by dropping the future.

use async_trait::async_trait;
use serde::Serialize;

use crate::core::models::{Endpoint, Target};
use crate::core::ports::{TransportError, VerdictResponse, VerdictTransport};

/// Request body sent to a verdict endpoint
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

/// reqwest-backed implementation of [`VerdictTransport`]
#[derive(Debug, Clone)]
pub struct HttpVerdictTransport {
    client: reqwest::Client,
}

impl HttpVerdictTransport {
    /// Build a transport with the crate's User-Agent
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("linkshield/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl VerdictTransport for HttpVerdictTransport {
    async fn fetch(
        &self,
        endpoint: &Endpoint,
        target: &Target,
    ) -> Result<VerdictResponse, TransportError> {
        let response = self
            .client
            .post(endpoint.as_str())
            .json(&AnalyzeRequest { url: &target.url })
            .send()
            .await
            .map_err(|err| TransportError::Connect(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<VerdictResponse>()
            .await
            .map_err(|err| TransportError::Malformed(err.to_string()))
    }
}
