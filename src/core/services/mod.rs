//! The verification and delivery pipeline
//!
//! Services operate on domain models through the port traits; none of them
//! hold state beyond `Arc`s to the injected ports, so concurrent flows are
//! fully independent.
//!
//! - [`verdict_client`] - ordered endpoint fallback with per-attempt timeout
//! - [`activator`] - best-effort idempotent agent activation
//! - [`delivery`] - bounded retry with backoff and an install nudge
//! - [`fallback`] - sub-scope to top-level delivery fallback
//! - [`orchestrator`] - the fire-and-forget end-to-end flow

pub mod activator;
pub mod delivery;
pub mod fallback;
pub mod orchestrator;
pub mod verdict_client;

pub use activator::{Activation, AgentActivator};
pub use delivery::{CommandDelivery, DeliveryError, DeliveryPolicy};
pub use fallback::ScopeFallbackDelivery;
pub use orchestrator::VerificationOrchestrator;
pub use verdict_client::VerdictClient;
