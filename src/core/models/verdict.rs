//! Verdicts and risk classifications
//!
//! A verdict is produced exactly once per verification attempt - either from
//! the first endpoint that answers with a well-formed response, or from the
//! fallback path when every endpoint is exhausted - and is immutable after
//! that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reason substituted when an endpoint response omits one
pub const DEFAULT_REASON: &str = "Unable to determine safety.";

/// Reason used when every configured endpoint failed or timed out
///
/// Deliberately names unreachability so a down backend is distinguishable
/// from other Unknown causes when diagnosing.
pub const ALL_ENDPOINTS_UNREACHABLE_REASON: &str =
    "Unable to verify: all verification endpoints were unreachable.";

/// Risk classification for a verified URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// No risk indicators found
    Safe,
    /// Risk indicators present, not conclusive
    Suspicious,
    /// Strong risk indicators (phishing, malware, scam)
    Danger,
    /// No endpoint produced a recognizable answer
    #[default]
    Unknown,
}

impl Classification {
    /// Parse a wire classification value, coercing anything unrecognized
    ///
    /// Endpoints answer with uppercase values, but matching is
    /// case-insensitive. A missing or malformed value never propagates
    /// verbatim; it becomes [`Classification::Unknown`].
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("SAFE") => Self::Safe,
            Some(v) if v.eq_ignore_ascii_case("SUSPICIOUS") => Self::Suspicious,
            Some(v) if v.eq_ignore_ascii_case("DANGER") => Self::Danger,
            _ => Self::Unknown,
        }
    }

    /// The wire representation of this classification
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Suspicious => "SUSPICIOUS",
            Self::Danger => "DANGER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The structured outcome of checking a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The URL that was checked
    pub url: String,
    /// Risk classification
    pub classification: Classification,
    /// Human-readable explanation; always non-empty
    pub reason: String,
    /// When the verdict was produced
    pub observed_at: DateTime<Utc>,
}

impl Verdict {
    /// Build a verdict from endpoint response fields, normalizing as needed
    ///
    /// An unrecognized classification becomes `Unknown`; a missing or empty
    /// reason becomes [`DEFAULT_REASON`].
    #[must_use]
    pub fn from_response(url: impl Into<String>, verdict: Option<&str>, reason: Option<&str>) -> Self {
        let reason = match reason.map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => DEFAULT_REASON.to_string(),
        };
        Self {
            url: url.into(),
            classification: Classification::parse_lenient(verdict),
            reason,
            observed_at: Utc::now(),
        }
    }

    /// Build the Unknown fallback verdict with an explanatory reason
    #[must_use]
    pub fn unknown(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            classification: Classification::Unknown,
            reason: reason.into(),
            observed_at: Utc::now(),
        }
    }
}
