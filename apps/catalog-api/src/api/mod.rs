//! API routes module

pub mod health;

use axum::{middleware, Router};
use domain_catalog::{handlers, CatalogService, ProductRepository};

use crate::metrics::track_requests;

/// Create all API routes; nested under `/api` by the router bootstrap
pub fn routes<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    Router::new()
        .nest("/products", handlers::router(service))
        .route_layer(middleware::from_fn(track_requests))
}
