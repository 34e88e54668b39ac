//! Verification orchestrator - the fire-and-forget end-to-end flow
//!
//! Bound to a user action in the embedding host: activate the rendering
//! agent, announce the verification, obtain a verdict, deliver the result.
//! Steps are strictly sequential; every failure is caught here, logged with
//! the step it came from, and swallowed. The worst observable outcome of a
//! run is a result that never renders - never an error at the trigger
//! source.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::VerifierConfig;
use crate::core::models::{AgentCommand, Scope, Target};
use crate::core::ports::{AgentChannel, VerdictTransport};

use super::activator::AgentActivator;
use super::delivery::CommandDelivery;
use super::fallback::ScopeFallbackDelivery;
use super::verdict_client::VerdictClient;

/// Drives one verification flow per user action
pub struct VerificationOrchestrator {
    activator: AgentActivator,
    delivery: CommandDelivery,
    fallback: ScopeFallbackDelivery,
    client: VerdictClient,
    config: VerifierConfig,
}

impl std::fmt::Debug for VerificationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl VerificationOrchestrator {
    /// Wire the pipeline over the injected channel and transport
    #[must_use]
    pub fn new(
        channel: Arc<dyn AgentChannel>,
        transport: Arc<dyn VerdictTransport>,
        config: VerifierConfig,
    ) -> Self {
        Self {
            activator: AgentActivator::new(Arc::clone(&channel)),
            delivery: CommandDelivery::new(Arc::clone(&channel)),
            fallback: ScopeFallbackDelivery::new(CommandDelivery::new(channel)),
            client: VerdictClient::new(transport),
            config,
        }
    }

    /// Run the full flow for one flagged URL
    ///
    /// Never returns an error and never panics; concurrent runs share no
    /// mutable state. The enabled/disabled user toggle is a gate the
    /// trigger layer checks before calling this - it is not consulted here.
    pub async fn run(&self, target: &Target, scope: &Scope) {
        // Gate before any network or messaging activity.
        if !target.is_verifiable() {
            debug!("{target} is not a verifiable URL; ignoring");
            return;
        }

        info!("verifying {target} for {scope}");

        // Best effort; delivery re-attempts installation itself if needed.
        let activation = self.activator.activate(scope).await;
        debug!("activation outcome for {scope}: {activation:?}");

        // A lost start notice is tolerable - it is superseded by the result
        // moments later - so it gets the short budget and no fallback.
        if let Err(err) = self
            .delivery
            .deliver(scope, &AgentCommand::Start, &self.config.start_policy())
            .await
        {
            warn!("start notice for {target} not delivered: {err}");
        }

        // Always runs, whatever the delivery steps did.
        let verdict = self
            .client
            .verify(target, &self.config.endpoints, self.config.attempt_timeout())
            .await;
        info!(
            "verdict for {target}: {} ({})",
            verdict.classification, verdict.reason
        );

        // Losing the final result is worse than losing the start notice:
        // longer budget, plus the top-level fallback.
        let delivered = self
            .fallback
            .deliver_with_fallback(
                scope,
                &AgentCommand::Result { payload: verdict },
                &self.config.result_policy(),
            )
            .await;
        if !delivered {
            warn!("result for {target} was never rendered in {scope}");
        }
    }
}
