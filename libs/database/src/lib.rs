//! Connection management for the stores behind our services
//!
//! Each backend lives behind a cargo feature and follows the same shape:
//! a `*Config` (optionally loadable with `core_config::FromEnv`), `connect*`
//! functions with and without retry, and `check_health*` probes.
//!
//! # Features
//!
//! - `elasticsearch` (default) - Elasticsearch over its REST API (reqwest)
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything above
//!
//! # Example
//!
//! ```ignore
//! use database::elasticsearch::{self, ElasticConfig};
//! use database::common::RetryConfig;
//!
//! let config = ElasticConfig::new("http://localhost:9200");
//! let client = elasticsearch::connect_from_config_with_retry(&config, Some(RetryConfig::new())).await?;
//! let healthy = elasticsearch::check_health(&client).await;
//! ```

pub mod common;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

pub use common::{DatabaseError, DatabaseResult};
