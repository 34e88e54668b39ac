//! In-process agent channel
//!
//! A local stand-in for the host-owned command channel, used by the CLI
//! `run` command to observe the full flow and by integration tests as a
//! realistic harness. Scopes become listener-ready only once an agent is
//! installed into them, so a cold scope exercises the same listener-absent
//! path a real host produces; contexts can be marked ineligible to stage
//! the terminal failure class.
//!
//! The embedded agent is deliberately trivial - it paints commands to the
//! console and records them - because the real rendering agent lives
//! outside this crate.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;

use crate::core::models::{AgentCommand, Scope};
use crate::core::ports::{AgentChannel, InstallError, SendError};
use crate::output;

#[derive(Debug, Default)]
struct ChannelState {
    installed: HashSet<Scope>,
    rendered: Vec<(Scope, AgentCommand)>,
}

/// Local [`AgentChannel`] with a console-rendering agent
#[derive(Debug, Default)]
pub struct LocalAgentChannel {
    state: Mutex<ChannelState>,
    ineligible_contexts: HashSet<u64>,
    quiet: bool,
}

impl LocalAgentChannel {
    /// Create a channel where every context is eligible
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a channel that refuses to host agents in the given contexts
    #[must_use]
    pub fn with_ineligible_contexts(contexts: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ineligible_contexts: contexts.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Suppress console painting; commands are still recorded
    #[must_use]
    pub fn silenced(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Every command the agent has rendered, in delivery order
    #[must_use]
    pub fn rendered(&self) -> Vec<(Scope, AgentCommand)> {
        self.lock().rendered.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelState> {
        // Lock poisoning only happens if a rendering panicked; the recorded
        // history is still the best available answer.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn is_ineligible(&self, scope: &Scope) -> bool {
        self.ineligible_contexts.contains(&scope.context_id)
    }
}

#[async_trait]
impl AgentChannel for LocalAgentChannel {
    async fn send(&self, scope: &Scope, command: &AgentCommand) -> Result<(), SendError> {
        if self.is_ineligible(scope) {
            return Err(SendError::ScopeIneligible(*scope));
        }

        let mut state = self.lock();
        if !state.installed.contains(scope) {
            return Err(SendError::ListenerAbsent(*scope));
        }

        if !self.quiet {
            output::paint_agent_command(scope, command);
        }
        state.rendered.push((*scope, command.clone()));
        Ok(())
    }

    async fn install_agent(&self, scope: &Scope) -> Result<(), InstallError> {
        if self.is_ineligible(scope) {
            return Err(InstallError::Ineligible(*scope));
        }

        // Idempotent: re-installing an already-ready scope is a no-op.
        let newly = self.lock().installed.insert(*scope);
        debug!(
            "{} agent in {scope}",
            if newly { "installed" } else { "re-initialized" }
        );
        Ok(())
    }
}
