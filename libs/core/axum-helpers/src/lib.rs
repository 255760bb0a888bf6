//! # Axum Helpers
//!
//! Shared building blocks for the HTTP side of the services:
//!
//! - **[`server`]**: router bootstrap with OpenAPI UIs, health endpoints,
//!   graceful shutdown
//! - **[`http`]**: security headers middleware
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: validated JSON extractor

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;
