//! Core domain types and ports for promptrig.
//!
//! This crate is pure: request/reply types, metric extraction over CLI text,
//! the prompt execution service, and the port traits infrastructure implements
//! (`PromptRunnerPort`, `ConversationStorePort`, `SystemProbePort`). No I/O
//! happens here - adapters live in `promptrig-runtime` and `promptrig-axum`.

#![deny(unsafe_code)]

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export commonly used types for convenience
pub use domain::{
    ConversationRecord, MetricsMap, PromptExchange, PromptReply, PromptRequest, RawOutput,
    SystemReport,
};
pub use ports::{
    CliInvocation, ConversationStorePort, PromptRunnerPort, RunnerError, StoreError,
    SystemProbePort,
};
pub use service::{PromptError, PromptService};
