//! Server infrastructure: router bootstrap, health endpoints and graceful
//! shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router, ShutdownCoordinator};
//!
//! let router = create_router::<ApiDoc>(api_routes).await?
//!     .merge(health_router(core_config::app_info!()));
//!
//! let coordinator = ShutdownCoordinator::new();
//! tokio::spawn({
//!     let coordinator = coordinator.clone();
//!     async move { coordinator.wait_for_signal().await }
//! });
//! create_production_app(router, &config, coordinator, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
