//! Addressable delivery scope
//!
//! A scope identifies where a command should be delivered: a context owned
//! by the external host, and optionally a sub-scope within it. Scope ids are
//! opaque to this crate; the only structural fact the core relies on is
//! whether a sub-scope is present.

use serde::{Deserialize, Serialize};

/// An addressable target for agent commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    /// Host-assigned context identifier
    pub context_id: u64,
    /// Sub-scope within the context; `None` means the top-level scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_scope_id: Option<u64>,
}

impl Scope {
    /// Address the top-level scope of a context
    #[must_use]
    pub const fn top_level_of(context_id: u64) -> Self {
        Self {
            context_id,
            sub_scope_id: None,
        }
    }

    /// Address a specific sub-scope within a context
    #[must_use]
    pub const fn sub_scope(context_id: u64, sub_scope_id: u64) -> Self {
        Self {
            context_id,
            sub_scope_id: Some(sub_scope_id),
        }
    }

    /// Whether this scope addresses a sub-scope rather than the top level
    #[must_use]
    pub const fn is_sub_scoped(&self) -> bool {
        self.sub_scope_id.is_some()
    }

    /// The same context with the sub-scope cleared
    #[must_use]
    pub const fn top_level(&self) -> Self {
        Self::top_level_of(self.context_id)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sub_scope_id {
            Some(sub) => write!(f, "context {}/sub-scope {}", self.context_id, sub),
            None => write!(f, "context {}", self.context_id),
        }
    }
}
