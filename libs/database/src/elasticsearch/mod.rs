//! Elasticsearch connector and utilities
//!
//! Talks to the cluster over its REST API; higher layers build requests with
//! [`ElasticClient::request`].

mod client;
mod config;
mod connector;
mod health;

pub use client::{ElasticClient, ElasticError};
pub use config::ElasticConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export reqwest types callers need to build requests
pub use reqwest::{Method, StatusCode};
