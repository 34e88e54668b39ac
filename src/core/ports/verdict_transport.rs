//! Verdict transport port
//!
//! One request/response exchange with a single verdict backend. The client
//! layers ordering, timeouts, and fallback on top; the transport only knows
//! how to ask one endpoint about one target.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Endpoint, Target};

/// Why a single endpoint exchange failed
///
/// Every variant means the same thing to the caller - move on to the next
/// endpoint - but they are kept distinct for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not connect or the exchange broke mid-flight
    #[error("connection failed: {0}")]
    Connect(String),

    /// The endpoint answered with a non-success status
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The response body was not the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Wire shape of a verdict endpoint response
///
/// Fields are all optional: normalization of missing or malformed values is
/// the client's job, not the transport's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerdictResponse {
    /// Echo of the checked URL, if the endpoint includes one
    #[serde(default)]
    pub url: Option<String>,
    /// Wire classification value (`SAFE`, `SUSPICIOUS`, `DANGER`, ...)
    #[serde(default)]
    pub verdict: Option<String>,
    /// Human-readable explanation
    #[serde(default)]
    pub reason: Option<String>,
}

/// One exchange with one verdict backend
#[async_trait]
pub trait VerdictTransport: Send + Sync {
    /// Ask `endpoint` for a verdict on `target`
    ///
    /// Cancellation safety: callers bound this future with a timeout and
    /// drop it on expiry, which must abort the underlying request.
    async fn fetch(
        &self,
        endpoint: &Endpoint,
        target: &Target,
    ) -> Result<VerdictResponse, TransportError>;
}
