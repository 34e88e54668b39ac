//! linkshield - resilient URL risk-verdict delivery
//!
//! This library flags a URL for a risk verdict against an ordered list of
//! verification endpoints and pushes the outcome to a rendering agent over a
//! host-owned, addressable command channel. Delivery is retried with backoff,
//! falls back from a sub-scope to its top-level scope, and the whole flow is
//! fire-and-forget: failures are logged, never raised to the trigger source.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
