//! Scope fallback delivery
//!
//! A sub-frame's agent can be unreachable while the surrounding top-level
//! context is perfectly able to render. Rather than silently losing the
//! result, a failed sub-scope delivery is retried once - one more full
//! delivery run, same command, same policy - against the top-level scope of
//! the same context. Top-level failures have nowhere further to fall back
//! to; they are logged and reduced to `false`.

use log::{debug, warn};

use crate::core::models::{AgentCommand, Scope};

use super::delivery::{CommandDelivery, DeliveryPolicy};

/// Wraps [`CommandDelivery`] with a sub-scope to top-level fallback
pub struct ScopeFallbackDelivery {
    delivery: CommandDelivery,
}

impl std::fmt::Debug for ScopeFallbackDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeFallbackDelivery").finish_non_exhaustive()
    }
}

impl ScopeFallbackDelivery {
    /// Wrap a delivery service
    #[must_use]
    pub const fn new(delivery: CommandDelivery) -> Self {
        Self { delivery }
    }

    /// Deliver to `scope`, falling back to its top-level scope on failure
    ///
    /// The fallback fires for either failure class: an exhausted sub-scope
    /// may simply host no agent, and an ineligible sub-scope can still sit
    /// inside an eligible context. A failed delivery is never escalated;
    /// the return value is the only signal.
    pub async fn deliver_with_fallback(
        &self,
        scope: &Scope,
        command: &AgentCommand,
        policy: &DeliveryPolicy,
    ) -> bool {
        match self.delivery.deliver(scope, command, policy).await {
            Ok(()) => true,
            Err(err) => {
                if !scope.is_sub_scoped() {
                    warn!("{} to {scope} lost: {err}", command.kind());
                    return false;
                }

                let top = scope.top_level();
                debug!(
                    "{} to {scope} failed ({err}); falling back to {top}",
                    command.kind()
                );
                match self.delivery.deliver(&top, command, policy).await {
                    Ok(()) => true,
                    Err(fallback_err) => {
                        warn!(
                            "{} to {scope} lost after top-level fallback: {fallback_err}",
                            command.kind()
                        );
                        false
                    },
                }
            },
        }
    }
}
