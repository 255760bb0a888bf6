//! # gRPC Client Library
//!
//! Channel creation with HTTP/2 tuning shared by every generated client in
//! the workspace.
//!
//! ## Quick Start
//! ```ignore
//! use grpc_client::create_channel;
//! use rpc::catalog::catalog_service_client::CatalogServiceClient;
//!
//! let channel = create_channel("http://[::1]:50051").await?;
//! let client = CatalogServiceClient::new(channel);
//! ```
//!
//! ### With Custom Configuration
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig};
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(10))
//!     .with_request_timeout(Duration::from_secs(120));
//!
//! let channel = create_channel_with_config("http://[::1]:50051", config).await?;
//! ```

pub mod channel;
pub mod error;

pub use channel::{
  ChannelConfig, create_channel, create_channel_lazy, create_channel_lazy_with_config,
  create_channel_with_config,
};
pub use error::{GrpcError, GrpcResult};
