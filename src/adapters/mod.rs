//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - reqwest-backed verdict transport
//! - `channel/` - in-process agent channel with a console-rendering agent,
//!   used by the CLI `run` command and as a realistic test harness

pub mod channel;
pub mod http;
