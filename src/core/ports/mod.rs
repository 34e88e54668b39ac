//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core pipeline logic and the
//! external collaborators it drives: the host-owned agent command channel
//! and the verdict-producing backends.
//!
//! Implementations live in the `adapters` module; tests inject scripted
//! mocks.

mod agent_channel;
mod verdict_transport;

pub use agent_channel::{AgentChannel, InstallError, SendError};
pub use verdict_transport::{TransportError, VerdictResponse, VerdictTransport};
