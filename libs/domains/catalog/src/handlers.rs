//! HTTP handlers for the catalog API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreateProduct, Pagination, Product, ProductIds, SearchQuery};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        get_products_by_ids,
        get_product,
    ),
    components(
        schemas(Product, CreateProduct, ProductIds),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Product catalog backed by the search index")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/batch", post(get_products_by_ids))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    params(Pagination),
    responses(
        (status = 200, description = "Page of products", body = Vec<Product>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(page): Query<Pagination>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_products(page.skip, page.take).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Catalog",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service
        .post_product(input.name, input.description, input.price)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Full-text search over name and description
///
/// `take` above 100 is clamped, and a request without `skip` and `take`
/// returns the first 100 hits.
#[utoipa::path(
    get,
    path = "/search",
    tag = "Catalog",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(search): Query<SearchQuery>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service
        .search_products(&search.query, search.skip, search.take)
        .await?;
    Ok(Json(products))
}

/// Fetch many products in one call
///
/// Unknown ids are left out of the response.
#[utoipa::path(
    post,
    path = "/batch",
    tag = "Catalog",
    request_body = ProductIds,
    responses(
        (status = 200, description = "Products found", body = Vec<Product>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_products_by_ids<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(body): Json<ProductIds>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_products_by_ids(&body.ids).await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}
