//! Drive the full orchestrated flow against a local rendering agent

use std::sync::Arc;

use anyhow::bail;

use linkshield::adapters::channel::LocalAgentChannel;
use linkshield::adapters::http::HttpVerdictTransport;
use linkshield::config::VerifierConfig;
use linkshield::core::models::{Scope, Target};
use linkshield::core::ports::AgentChannel;
use linkshield::core::services::VerificationOrchestrator;
use linkshield::output::{OperationResult, OutputMode, RunReport};

/// Run activation, start notice, verification, and result delivery locally
pub async fn run(
    config: &VerifierConfig,
    url: &str,
    context: u64,
    sub_scope: Option<u64>,
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

    let scope = sub_scope.map_or_else(
        || Scope::top_level_of(context),
        |sub| Scope::sub_scope(context, sub),
    );

    let channel = Arc::new(match mode {
        OutputMode::Human => LocalAgentChannel::new(),
        OutputMode::Json => LocalAgentChannel::new().silenced(),
    });
    let agent_channel: Arc<dyn AgentChannel> = channel.clone();
    let transport = Arc::new(HttpVerdictTransport::new()?);

    let orchestrator = VerificationOrchestrator::new(agent_channel, transport, config.clone());
    orchestrator.run(&target, &scope).await;

    let report = RunReport::from_rendered(&channel.rendered());
    report.render(mode);
    Ok(())
}
