//! Axum web adapter for promptrig.
//!
//! Thin HTTP boundary over the core: handlers validate nothing beyond JSON
//! shape and delegate straight to the `PromptService` and the collaborator
//! ports, mapping domain errors to status codes.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use routes::{create_router, create_spa_router};
