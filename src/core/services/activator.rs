//! Agent activator - best-effort idempotent activation
//!
//! Ensures a rendering agent is present and listening in a scope before the
//! first command is sent. Activation never raises: the outcome is recorded
//! for the caller to inspect and logged. Redundant activation is safe - the
//! host's install operation is idempotent, so activating an already-active
//! scope costs at most a harmless re-init on the agent side.

use std::sync::Arc;

use log::{debug, warn};

use crate::core::models::Scope;
use crate::core::ports::{AgentChannel, InstallError};

/// Outcome of an activation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The install request was accepted (agent present or being installed)
    Installed,
    /// The scope structurally cannot host an agent
    Ineligible,
    /// The install failed for a transient or host-internal reason
    Failed,
}

impl Activation {
    /// Whether the scope is worth delivering to after this outcome
    #[must_use]
    pub const fn is_usable(self) -> bool {
        matches!(self, Self::Installed | Self::Failed)
    }
}

/// Installs the rendering agent into scopes ahead of delivery
pub struct AgentActivator {
    channel: Arc<dyn AgentChannel>,
}

impl std::fmt::Debug for AgentActivator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentActivator").finish_non_exhaustive()
    }
}

impl AgentActivator {
    /// Create an activator over the given channel
    #[must_use]
    pub fn new(channel: Arc<dyn AgentChannel>) -> Self {
        Self { channel }
    }

    /// Install the agent into `scope`, recording rather than raising failures
    pub async fn activate(&self, scope: &Scope) -> Activation {
        match self.channel.install_agent(scope).await {
            Ok(()) => {
                debug!("agent activated in {scope}");
                Activation::Installed
            },
            Err(InstallError::Ineligible(_)) => {
                debug!("{scope} cannot host an agent; skipping activation");
                Activation::Ineligible
            },
            Err(err @ InstallError::Failed { .. }) => {
                warn!("agent activation failed: {err}");
                Activation::Failed
            },
        }
    }
}
