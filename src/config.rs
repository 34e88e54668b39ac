//! Verifier configuration
//!
//! Supplies the externally-configured constants of the pipeline: the ordered
//! endpoint list, the per-attempt verification timeout, the delivery
//! policies for the start notice and the final result, and the user's
//! enabled/disabled toggle. Loaded from `~/.config/linkshield/config.toml`
//! (XDG standard) or an explicit path; every field has a default, so a
//! missing or partial file still yields a working configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::models::Endpoint;
use crate::core::services::DeliveryPolicy;

/// Delivery attempt count and backoff base for one command kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Total send attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Backoff base in milliseconds; delay before retry `n + 1` is `base x n`
    #[serde(default = "default_base_backoff_ms")]
    pub base_backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
    2
}

fn default_base_backoff_ms() -> u64 {
    200
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_backoff_ms: default_base_backoff_ms(),
        }
    }
}

impl DeliveryConfig {
    /// The policy this configuration describes
    #[must_use]
    pub const fn policy(&self) -> DeliveryPolicy {
        DeliveryPolicy::new(self.max_attempts, Duration::from_millis(self.base_backoff_ms))
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// User toggle; checked by the trigger layer before a flow starts
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Candidate verdict endpoints, in fallback order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<Endpoint>,
    /// Per-endpoint attempt timeout in milliseconds
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
    /// Delivery budget for the transient start notice
    #[serde(default)]
    pub start_delivery: DeliveryConfig,
    /// Delivery budget for the final result; more patient than start,
    /// because losing the result is worse than losing the notice
    #[serde(default = "default_result_delivery")]
    pub result_delivery: DeliveryConfig,
}

fn default_enabled() -> bool {
    true
}

fn default_endpoints() -> Vec<Endpoint> {
    vec![Endpoint::new("http://127.0.0.1:8000/analyze")]
}

fn default_attempt_timeout_ms() -> u64 {
    8000
}

fn default_result_delivery() -> DeliveryConfig {
    DeliveryConfig {
        max_attempts: 4,
        base_backoff_ms: 300,
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoints: default_endpoints(),
            attempt_timeout_ms: default_attempt_timeout_ms(),
            start_delivery: DeliveryConfig::default(),
            result_delivery: default_result_delivery(),
        }
    }
}

impl VerifierConfig {
    /// The default config file path (`~/.config/linkshield/config.toml`)
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("linkshield")
            .join("config.toml")
    }

    /// Load config from the default location, or defaults if not present
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load config from a specific path, falling back to defaults
    ///
    /// An unreadable or unparseable file behaves like a missing one; the
    /// pipeline must keep working with whatever configuration it has.
    #[must_use]
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Per-endpoint attempt timeout
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    /// Delivery policy for the start notice
    #[must_use]
    pub const fn start_policy(&self) -> DeliveryPolicy {
        self.start_delivery.policy()
    }

    /// Delivery policy for the final result
    #[must_use]
    pub const fn result_policy(&self) -> DeliveryPolicy {
        self.result_delivery.policy()
    }
}
