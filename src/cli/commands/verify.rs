//! Query the verdict endpoints directly

use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;

use linkshield::adapters::http::HttpVerdictTransport;
use linkshield::config::VerifierConfig;
use linkshield::core::models::{Endpoint, Target};
use linkshield::core::services::VerdictClient;
use linkshield::output::{OperationResult, OutputMode, VerdictReport};

/// Check one URL against the configured (or overridden) endpoints
pub async fn verify(
    config: &VerifierConfig,
    url: &str,
    endpoint_overrides: &[String],
    timeout_ms: Option<u64>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !config.enabled {
        let result = OperationResult {
            success: false,
            message: "Verification is disabled in the configuration.".to_string(),
        };
        result.render(mode);
        return Ok(());
    }

    let target = Target::new(url);
    if !target.is_verifiable() {
        bail!("not a verifiable URL (http/https required): {url}");
    }

    let endpoints: Vec<Endpoint> = if endpoint_overrides.is_empty() {
        config.endpoints.clone()
    } else {
        endpoint_overrides
            .iter()
            .map(String::as_str)
            .map(Endpoint::from)
            .collect()
    };
    if endpoints.is_empty() {
        bail!("no verdict endpoints configured");
    }

    let timeout = timeout_ms.map_or_else(|| config.attempt_timeout(), Duration::from_millis);

    let transport = Arc::new(HttpVerdictTransport::new()?);
    let client = VerdictClient::new(transport);
    let verdict = client.verify(&target, &endpoints, timeout).await;

    let report = VerdictReport {
        verdict,
        endpoints_tried: endpoints.len(),
    };
    report.render(mode);
    Ok(())
}
