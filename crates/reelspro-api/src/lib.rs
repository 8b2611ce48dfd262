//! # reelspro-api
//!
//! HTTP API layer for ReelsPro built on Axum: request/response DTOs,
//! the authentication extractor, error mapping, middleware, and the
//! router that wires handlers to application state.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
