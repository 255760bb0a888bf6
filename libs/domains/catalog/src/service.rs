//! Catalog Service - business logic layer

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::error::CatalogResult;
use crate::id::{IdGenerator, UuidV7Generator};
use crate::metrics;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Largest page a search returns, and the page size used when none is given
pub const MAX_PAGE_SIZE: u64 = 100;

/// Clamp search pagination: `take` above [`MAX_PAGE_SIZE`], or a request with
/// neither `skip` nor `take`, becomes a full page. Everything else passes
/// through.
pub fn normalize_pagination(skip: u64, take: u64) -> (u64, u64) {
    if take > MAX_PAGE_SIZE || (skip == 0 && take == 0) {
        (skip, MAX_PAGE_SIZE)
    } else {
        (skip, take)
    }
}

/// Catalog service: assigns ids on creation, applies the search pagination
/// policy and delegates everything else to the repository.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a service that assigns UUIDv7 ids
    pub fn new(repository: R) -> Self {
        Self::with_id_generator(repository, Arc::new(UuidV7Generator))
    }

    pub fn with_id_generator(repository: R, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository: Arc::new(repository),
            ids,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and index a new product.
    ///
    /// Not idempotent: calling again creates a second product with a new id.
    #[instrument(skip(self, description), fields(product_name = %name))]
    pub async fn post_product(
        &self,
        name: String,
        description: String,
        price: f64,
    ) -> CatalogResult<Product> {
        let product = Product {
            id: self.ids.next_id(),
            name,
            description,
            price,
        };

        if let Err(e) = self.repository.put_product(&product).await {
            error!(product_id = %product.id, error = %e, "failed to index new product");
            return Err(e);
        }

        metrics::record_created();
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.repository.get_product_by_id(id).await
    }

    /// Unfiltered listing; `skip` and `take` are passed through unchanged
    #[instrument(skip(self))]
    pub async fn get_products(&self, skip: u64, take: u64) -> CatalogResult<Vec<Product>> {
        self.repository.list_products(skip, take).await
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_products_by_ids(&self, ids: &[String]) -> CatalogResult<Vec<Product>> {
        self.repository.list_products_with_ids(ids).await
    }

    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: &str,
        skip: u64,
        take: u64,
    ) -> CatalogResult<Vec<Product>> {
        let (skip, take) = normalize_pagination(skip, take);
        self.repository.search_products(query, skip, take).await
    }
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ids: Arc::clone(&self.ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::id::SequenceGenerator;
    use crate::repository::MockProductRepository;
    use mockall::predicate::*;

    fn sample(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Widget".to_string(),
            description: "A useful widget".to_string(),
            price: 9.99,
        }
    }

    #[test]
    fn test_normalize_pagination() {
        assert_eq!(normalize_pagination(0, 0), (0, 100));
        assert_eq!(normalize_pagination(0, 500), (0, 100));
        assert_eq!(normalize_pagination(7, 101), (7, 100));
        assert_eq!(normalize_pagination(5, 30), (5, 30));
        assert_eq!(normalize_pagination(0, 100), (0, 100));
        assert_eq!(normalize_pagination(0, 1), (0, 1));
        // An explicit offset with no page size is left alone
        assert_eq!(normalize_pagination(5, 0), (5, 0));
    }

    #[tokio::test]
    async fn test_post_product_assigns_generated_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_put_product()
            .withf(|p| p.id == "p-00000000000000000001" && p.name == "Widget" && p.price == 9.99)
            .times(1)
            .returning(|_| Ok(()));

        let service =
            CatalogService::with_id_generator(repo, Arc::new(SequenceGenerator::new("p-")));
        let product = service
            .post_product("Widget".into(), "A useful widget".into(), 9.99)
            .await
            .unwrap();

        assert_eq!(product.id, "p-00000000000000000001");
        assert_eq!(product.description, "A useful widget");
    }

    #[tokio::test]
    async fn test_post_product_ids_are_distinct_and_increasing() {
        let mut repo = MockProductRepository::new();
        repo.expect_put_product().times(50).returning(|_| Ok(()));

        let service = CatalogService::new(repo);
        let mut ids = Vec::new();
        for i in 0..50 {
            let product = service
                .post_product(format!("p{}", i), String::new(), 1.0)
                .await
                .unwrap();
            assert!(!product.id.is_empty());
            ids.push(product.id);
        }

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, ids);
    }

    #[tokio::test]
    async fn test_post_product_failure_returns_no_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_put_product()
            .times(1)
            .returning(|_| Err(CatalogError::Index("connection refused".into())));

        let service = CatalogService::new(repo);
        let result = service.post_product("Widget".into(), String::new(), 1.0).await;
        assert!(matches!(result, Err(CatalogError::Index(_))));
    }

    #[tokio::test]
    async fn test_get_product_propagates_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .with(eq("nonexistent"))
            .times(1)
            .returning(|id| Err(CatalogError::NotFound(id.to_string())));

        let service = CatalogService::new(repo);
        let err = service.get_product("nonexistent").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_product_returns_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .with(eq("a"))
            .returning(|id| Ok(sample(id)));

        let service = CatalogService::new(repo);
        assert_eq!(service.get_product("a").await.unwrap(), sample("a"));
    }

    #[tokio::test]
    async fn test_get_products_does_not_adjust_pagination() {
        let mut repo = MockProductRepository::new();
        repo.expect_list_products()
            .with(eq(0u64), eq(0u64))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = CatalogService::new(repo);
        assert!(service.get_products(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_products_by_ids_passes_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_list_products_with_ids()
            .withf(|ids| ids == ["a".to_string(), "b".to_string()])
            .times(1)
            .returning(|_| Ok(vec![sample("a")]));

        let service = CatalogService::new(repo);
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(service.get_products_by_ids(&ids).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_products_clamps_pagination() {
        let cases: [((u64, u64), (u64, u64)); 3] =
            [((0, 0), (0, 100)), ((0, 500), (0, 100)), ((5, 30), (5, 30))];

        for ((skip, take), (expected_skip, expected_take)) in cases {
            let mut repo = MockProductRepository::new();
            repo.expect_search_products()
                .with(eq("widget"), eq(expected_skip), eq(expected_take))
                .times(1)
                .returning(|_, _, _| Ok(Vec::new()));

            let service = CatalogService::new(repo);
            service.search_products("widget", skip, take).await.unwrap();
        }
    }
}
