//! gRPC surface of the catalog: the tonic server adapter and the typed
//! client the gateway uses to reach it.

mod client;
mod conversions;
mod server;

pub use client::{CATALOG_SERVICE_URL, CatalogClient};
pub use server::CatalogGrpcService;
