//! Agent commands
//!
//! The rendering agent understands exactly two commands: `start` announces
//! that a verification is underway, `result` carries the finished verdict.
//! Commands are one-shot and fire-and-forget; delivery yields nothing beyond
//! an acknowledgment.

use serde::{Deserialize, Serialize};

use super::Verdict;

/// A command for the rendering agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AgentCommand {
    /// Announce that verification of a URL has started
    Start,
    /// Deliver the finished verdict for rendering
    Result {
        /// The verdict to render
        payload: Verdict,
    },
}

impl AgentCommand {
    /// Short name for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Result { .. } => "result",
        }
    }
}
