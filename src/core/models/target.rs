//! Verification target
//!
//! A target is the URL a user flagged for a risk verdict. It carries no
//! identity beyond its string value; two targets with equal URLs are
//! interchangeable.

use serde::{Deserialize, Serialize};

/// A URL flagged for verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// The URL to verify
    pub url: String,
}

impl Target {
    /// Create a target for the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Whether this target is eligible for verification
    ///
    /// Only network-addressable http/https URLs can be flagged; anything
    /// else (browser-internal pages, data URLs, garbage) is rejected before
    /// any network or messaging activity happens.
    #[must_use]
    pub fn is_verifiable(&self) -> bool {
        url::Url::parse(&self.url)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
