//! CLI crate for promptrig.
//!
//! `main.rs` is the composition root; this library holds the parser,
//! the command definitions, and the handlers they dispatch to.

#![deny(unsafe_code)]

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
