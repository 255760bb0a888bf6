use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// List and batch operations never fail because of a single bad document;
/// only a failure of the whole index call is returned as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert or replace the product at `product.id`
    async fn put_product(&self, product: &Product) -> CatalogResult<()>;

    /// Point lookup; `CatalogError::NotFound` when nothing is stored at `id`
    async fn get_product_by_id(&self, id: &str) -> CatalogResult<Product>;

    /// Batched lookup in one index round trip. Missing ids are omitted and the
    /// result follows the index's response order.
    async fn list_products_with_ids(&self, ids: &[String]) -> CatalogResult<Vec<Product>>;

    /// Unfiltered listing
    async fn list_products(&self, skip: u64, take: u64) -> CatalogResult<Vec<Product>>;

    /// Full-text search over name and description
    async fn search_products(&self, query: &str, skip: u64, take: u64)
    -> CatalogResult<Vec<Product>>;
}
