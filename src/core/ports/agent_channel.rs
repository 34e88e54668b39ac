//! Agent command channel port
//!
//! The host process owns an addressable command channel keyed by scope. This
//! trait is the core's view of it: send a command and await the agent's
//! acknowledgment, or ask the host to install the rendering agent into a
//! scope. Both operations are injected into the services - never reached
//! through a global.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::{AgentCommand, Scope};

/// Why a command send failed
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// The scope has no agent listening yet; retryable once one installs
    #[error("no listener in {0}")]
    ListenerAbsent(Scope),

    /// The scope structurally cannot host an agent; never retryable
    #[error("{0} cannot host an agent")]
    ScopeIneligible(Scope),
}

/// Why an agent install failed
#[derive(Debug, Clone, Error)]
pub enum InstallError {
    /// The scope structurally cannot host an agent
    #[error("{0} cannot host an agent")]
    Ineligible(Scope),

    /// The host rejected or botched the install for another reason
    #[error("agent install into {scope} failed: {message}")]
    Failed {
        /// The scope the install was aimed at
        scope: Scope,
        /// Host-provided failure detail
        message: String,
    },
}

/// Host-owned command channel to the rendering agent
///
/// `send` resolves `Ok` only when the agent acknowledged the command within
/// the host's own channel semantics; absence of an acknowledgment surfaces
/// as [`SendError::ListenerAbsent`]. `install_agent` is idempotent on the
/// host side: installing into a scope that already has an agent is a
/// harmless no-op re-init.
#[async_trait]
pub trait AgentChannel: Send + Sync {
    /// Send a command to a scope and await acknowledgment
    async fn send(&self, scope: &Scope, command: &AgentCommand) -> Result<(), SendError>;

    /// Install the rendering agent into a scope
    async fn install_agent(&self, scope: &Scope) -> Result<(), InstallError>;
}
