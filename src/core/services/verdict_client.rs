//! Verdict client - ordered endpoint fallback
//!
//! Queries candidate verification endpoints one at a time, each bounded by a
//! timeout, and returns the first well-formed verdict. Strict ordered
//! fallback (not a fan-out race) keeps worst-case latency bounded at
//! `timeout x endpoints` and the behavior deterministic; endpoint lists are
//! short and this flow is user-triggered, not latency-critical.
//!
//! The client never fails outward: total exhaustion produces an Unknown
//! verdict whose reason names the unreachability.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::core::models::{Endpoint, Target, Verdict, ALL_ENDPOINTS_UNREACHABLE_REASON};
use crate::core::ports::VerdictTransport;

/// Client for the ordered list of verdict backends
pub struct VerdictClient {
    transport: Arc<dyn VerdictTransport>,
}

impl std::fmt::Debug for VerdictClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerdictClient").finish_non_exhaustive()
    }
}

impl VerdictClient {
    /// Create a client over the given transport
    #[must_use]
    pub fn new(transport: Arc<dyn VerdictTransport>) -> Self {
        Self { transport }
    }

    /// Obtain a verdict for `target`, trying `endpoints` in order
    ///
    /// Each attempt gets `per_attempt_timeout`; expiry drops the in-flight
    /// request, not just the wait. Connection failures, non-success
    /// statuses, malformed bodies, and timeouts all advance to the next
    /// endpoint without retrying the current one. The first well-formed
    /// response wins and remaining endpoints are not contacted.
    pub async fn verify(
        &self,
        target: &Target,
        endpoints: &[Endpoint],
        per_attempt_timeout: Duration,
    ) -> Verdict {
        for endpoint in endpoints {
            let attempt = self.transport.fetch(endpoint, target);
            match tokio::time::timeout(per_attempt_timeout, attempt).await {
                Ok(Ok(response)) => {
                    debug!(
                        "endpoint {endpoint} answered for {target}: {:?}",
                        response.verdict
                    );
                    return Verdict::from_response(
                        target.url.clone(),
                        response.verdict.as_deref(),
                        response.reason.as_deref(),
                    );
                },
                Ok(Err(err)) => {
                    warn!("endpoint {endpoint} failed for {target}: {err}");
                },
                Err(_) => {
                    warn!(
                        "endpoint {endpoint} timed out after {}ms for {target}",
                        per_attempt_timeout.as_millis()
                    );
                },
            }
        }

        warn!("all {} endpoint(s) exhausted for {target}", endpoints.len());
        Verdict::unknown(target.url.clone(), ALL_ENDPOINTS_UNREACHABLE_REASON)
    }
}
