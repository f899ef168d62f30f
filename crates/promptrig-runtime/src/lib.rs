//! OS-level adapters for promptrig: subprocess execution, host probing,
//! and conversation persistence.
//!
//! Everything here implements a port from `promptrig-core`; no domain
//! decisions are made in this crate.

#![deny(unsafe_code)]

mod runner;
mod shutdown;
mod store;
pub mod system;

pub use runner::{AdmissionPolicy, DEFAULT_MAX_CONCURRENT, DEFAULT_RUN_TIMEOUT, OllamaRunner};
pub use store::FileConversationStore;
pub use system::DefaultSystemProbe;
