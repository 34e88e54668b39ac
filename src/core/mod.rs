//! Core domain logic for linkshield
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Target, Scope, AgentCommand, Verdict)
//! - `services/` - The verification and delivery pipeline
//! - `ports/` - Trait definitions for the host channel and verdict backend

pub mod models;
pub mod ports;
pub mod services;
