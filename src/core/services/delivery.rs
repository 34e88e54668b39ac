//! Command delivery - bounded retry with backoff and an install nudge
//!
//! Sends a single command to a scope. "No listener yet" is an expected,
//! short-lived condition (the agent is still installing, or was never
//! installed); it is retried with linearly increasing backoff, and the very
//! first such failure triggers one fire-and-forget install request for the
//! scope. A scope that cannot host an agent at all is terminal: retrying
//! cannot change it, so delivery aborts immediately with a distinct error.
//!
//! Backoff is linear in the attempt number, not exponential: expected
//! recovery time (an agent finishing installation) is short and bounded, and
//! a long exponential tail would only delay a fire-and-forget UI update.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::core::models::{AgentCommand, Scope};
use crate::core::ports::{AgentChannel, SendError};

/// How persistently a command is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPolicy {
    /// Total send attempts before giving up
    pub max_attempts: u32,
    /// Backoff base; the delay before retry `n + 1` is `base x n`
    pub base_backoff: Duration,
}

impl DeliveryPolicy {
    /// Create a policy
    #[must_use]
    pub const fn new(max_attempts: u32, base_backoff: Duration) -> Self {
        Self {
            max_attempts,
            base_backoff,
        }
    }

    /// Delay to sleep after failed attempt number `attempt` (1-based)
    #[must_use]
    pub const fn delay_after(&self, attempt: u32) -> Duration {
        self.base_backoff.saturating_mul(attempt)
    }
}

/// Terminal delivery failures, kept distinct so callers can tell them apart
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// Every attempt found no listener in the scope
    #[error("delivery to {scope} gave up after {attempts} attempt(s)")]
    Exhausted {
        /// The scope that never became listener-ready
        scope: Scope,
        /// How many attempts were made
        attempts: u32,
    },

    /// The scope cannot host an agent; no attempt was retried
    #[error("delivery aborted: {0} cannot host an agent")]
    Ineligible(Scope),
}

/// Delivers one command to one scope with bounded retries
pub struct CommandDelivery {
    channel: Arc<dyn AgentChannel>,
}

impl std::fmt::Debug for CommandDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDelivery").finish_non_exhaustive()
    }
}

impl CommandDelivery {
    /// Create a delivery service over the given channel
    #[must_use]
    pub fn new(channel: Arc<dyn AgentChannel>) -> Self {
        Self { channel }
    }

    /// Send `command` to `scope`, retrying listener-absent failures
    ///
    /// Returns `Ok(())` on acknowledgment. Listener-absent failures are
    /// retried up to `policy.max_attempts` with linearly increasing delay;
    /// the first one also fires a best-effort install request (errors
    /// logged and ignored). A scope-ineligible failure aborts immediately.
    pub async fn deliver(
        &self,
        scope: &Scope,
        command: &AgentCommand,
        policy: &DeliveryPolicy,
    ) -> Result<(), DeliveryError> {
        let mut nudged = false;

        for attempt in 1..=policy.max_attempts {
            match self.channel.send(scope, command).await {
                Ok(()) => {
                    debug!(
                        "{} delivered to {scope} on attempt {attempt}",
                        command.kind()
                    );
                    return Ok(());
                },
                Err(SendError::ScopeIneligible(_)) => {
                    debug!("{scope} cannot host an agent; not retrying {}", command.kind());
                    return Err(DeliveryError::Ineligible(*scope));
                },
                Err(SendError::ListenerAbsent(_)) => {
                    debug!(
                        "no listener in {scope} for {} (attempt {attempt}/{})",
                        command.kind(),
                        policy.max_attempts
                    );
                    // Lazy provisioning, once: the first miss usually means
                    // the agent was never installed in this scope.
                    if !nudged {
                        nudged = true;
                        if let Err(err) = self.channel.install_agent(scope).await {
                            debug!("install nudge for {scope} failed: {err}");
                        }
                    }
                    if attempt < policy.max_attempts {
                        tokio::time::sleep(policy.delay_after(attempt)).await;
                    }
                },
            }
        }

        warn!(
            "{} to {scope} undeliverable after {} attempt(s)",
            command.kind(),
            policy.max_attempts
        );
        Err(DeliveryError::Exhausted {
            scope: *scope,
            attempts: policy.max_attempts,
        })
    }
}
