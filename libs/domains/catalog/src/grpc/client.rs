use core_config::{ConfigError, env_required};
use grpc_client::{GrpcResult, create_channel, create_channel_lazy};
use rpc::catalog::catalog_service_client::CatalogServiceClient;
use rpc::catalog::{
    CreateProductRequest, GetProductRequest, GetProductsByIdsRequest, ListProductsRequest,
    SearchProductsRequest,
};
use tonic::transport::Channel;

use super::conversions::from_products_response;
use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;

/// Environment variable holding the catalog service address
pub const CATALOG_SERVICE_URL: &str = "CATALOG_SERVICE_URL";

/// Typed client for a remote catalog service.
///
/// Status codes are mapped back into [`CatalogError`], so a missing product is
/// still `CatalogError::NotFound` on this side of the network.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: CatalogServiceClient<Channel>,
}

impl CatalogClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: CatalogServiceClient::new(channel),
        }
    }

    /// Connect eagerly; fails if the service cannot be reached
    pub async fn connect(addr: impl Into<String>) -> GrpcResult<Self> {
        Ok(Self::new(create_channel(addr).await?))
    }

    /// Build a client whose channel connects on the first call
    pub fn connect_lazy(addr: impl Into<String>) -> GrpcResult<Self> {
        Ok(Self::new(create_channel_lazy(addr)?))
    }

    /// Lazy client for the address in `CATALOG_SERVICE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env_required(CATALOG_SERVICE_URL)?;
        Self::connect_lazy(url).map_err(|e| ConfigError::ParseError {
            key: CATALOG_SERVICE_URL.to_string(),
            details: e.to_string(),
        })
    }

    pub async fn create_product(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> CatalogResult<Product> {
        let response = self
            .inner
            .clone()
            .create_product(CreateProductRequest {
                name: name.into(),
                description: description.into(),
                price,
            })
            .await?
            .into_inner();

        response
            .product
            .map(Into::into)
            .ok_or_else(|| CatalogError::Decode("create response carried no product".into()))
    }

    pub async fn get_product(&self, id: impl Into<String>) -> CatalogResult<Product> {
        let response = self
            .inner
            .clone()
            .get_product(GetProductRequest { id: id.into() })
            .await?
            .into_inner();

        response
            .product
            .map(Into::into)
            .ok_or_else(|| CatalogError::Decode("get response carried no product".into()))
    }

    pub async fn list_products(&self, skip: u64, take: u64) -> CatalogResult<Vec<Product>> {
        let response = self
            .inner
            .clone()
            .list_products(ListProductsRequest { skip, take })
            .await?;
        Ok(from_products_response(response.into_inner()))
    }

    pub async fn get_products_by_ids(&self, ids: Vec<String>) -> CatalogResult<Vec<Product>> {
        let response = self
            .inner
            .clone()
            .get_products_by_ids(GetProductsByIdsRequest { ids })
            .await?;
        Ok(from_products_response(response.into_inner()))
    }

    pub async fn search_products(
        &self,
        query: impl Into<String>,
        skip: u64,
        take: u64,
    ) -> CatalogResult<Vec<Product>> {
        let response = self
            .inner
            .clone()
            .search_products(SearchProductsRequest {
                query: query.into(),
                skip,
                take,
            })
            .await?;
        Ok(from_products_response(response.into_inner()))
    }
}
