use async_trait::async_trait;
use rpc::catalog::catalog_service_server::{CatalogService as CatalogRpc, CatalogServiceServer};
use rpc::catalog::{
    CreateProductRequest, CreateProductResponse, GetProductRequest, GetProductResponse,
    GetProductsByIdsRequest, ListProductsRequest, ProductsResponse, SearchProductsRequest,
};
use tonic::{Request, Response, Status};

use super::conversions::products_response;
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// gRPC implementation of `catalog.CatalogService`
pub struct CatalogGrpcService<R: ProductRepository> {
    service: CatalogService<R>,
}

impl<R: ProductRepository + 'static> CatalogGrpcService<R> {
    pub fn new(service: CatalogService<R>) -> Self {
        Self { service }
    }

    /// Wrap into the tonic service ready to be added to a server
    pub fn into_server(self) -> CatalogServiceServer<Self> {
        CatalogServiceServer::new(self)
    }
}

#[async_trait]
impl<R: ProductRepository + 'static> CatalogRpc for CatalogGrpcService<R> {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();
        let product = self
            .service
            .post_product(req.name, req.description, req.price)
            .await?;

        Ok(Response::new(CreateProductResponse {
            product: Some(product.into()),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let product = self.service.get_product(&request.into_inner().id).await?;

        Ok(Response::new(GetProductResponse {
            product: Some(product.into()),
        }))
    }

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ProductsResponse>, Status> {
        let req = request.into_inner();
        let products = self.service.get_products(req.skip, req.take).await?;
        Ok(Response::new(products_response(products)))
    }

    async fn get_products_by_ids(
        &self,
        request: Request<GetProductsByIdsRequest>,
    ) -> Result<Response<ProductsResponse>, Status> {
        let products = self
            .service
            .get_products_by_ids(&request.into_inner().ids)
            .await?;
        Ok(Response::new(products_response(products)))
    }

    async fn search_products(
        &self,
        request: Request<SearchProductsRequest>,
    ) -> Result<Response<ProductsResponse>, Status> {
        let req = request.into_inner();
        let products = self
            .service
            .search_products(&req.query, req.skip, req.take)
            .await?;
        Ok(Response::new(products_response(products)))
    }
}
