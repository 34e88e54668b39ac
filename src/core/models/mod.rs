//! Domain models for linkshield
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Target`] - "Check this URL"
//! - [`Scope`] - Where a command should be delivered
//! - [`AgentCommand`] - What the rendering agent is told to paint
//! - [`Verdict`] - The structured outcome of checking a URL
//! - [`Classification`] - How risky the URL was judged to be
//! - [`Endpoint`] - One candidate backend address

mod command;
mod endpoint;
mod scope;
mod target;
mod verdict;

pub use command::AgentCommand;
pub use endpoint::Endpoint;
pub use scope::Scope;
pub use target::Target;
pub use verdict::{Classification, Verdict, ALL_ENDPOINTS_UNREACHABLE_REASON, DEFAULT_REASON};
