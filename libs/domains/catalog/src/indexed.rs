//! [`ProductRepository`] over any [`DocumentIndex`].

use async_trait::async_trait;
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::{debug, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::index::{DocumentIndex, IndexQuery, IndexedDocument};
use crate::metrics;
use crate::models::{Product, ProductDocument};
use crate::repository::ProductRepository;

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "catalog";

/// What list, search and batch reads do with a hit that cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DecodePolicy {
    /// Drop the hit, log it and count it in `catalog_undecodable_documents_total`
    #[default]
    Skip,
    /// Fail the whole call with `CatalogError::Decode`
    Fail,
}

fn decode(document: IndexedDocument) -> CatalogResult<Product> {
    let IndexedDocument { id, source } = document;
    serde_json::from_value::<ProductDocument>(source)
        .map(|doc| doc.into_product(id.clone()))
        .map_err(|e| CatalogError::Decode(format!("document {}: {}", id, e)))
}

pub struct IndexedProductRepository<I: DocumentIndex> {
    index: Arc<I>,
    collection: String,
    decode_policy: DecodePolicy,
}

impl<I: DocumentIndex> IndexedProductRepository<I> {
    pub fn new(index: I) -> Self {
        Self::from_arc(Arc::new(index))
    }

    pub fn from_arc(index: Arc<I>) -> Self {
        Self {
            index,
            collection: DEFAULT_COLLECTION.to_string(),
            decode_policy: DecodePolicy::default(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    /// Create the collection with its text mappings if it is missing
    #[instrument(skip(self), fields(collection = %self.collection))]
    pub async fn init_collection(&self) -> CatalogResult<()> {
        self.index.ensure_collection(&self.collection).await?;
        Ok(())
    }

    /// Decode every hit independently, applying the decode policy
    fn decode_hits(
        &self,
        operation: &'static str,
        documents: Vec<IndexedDocument>,
    ) -> CatalogResult<Vec<Product>> {
        let total = documents.len();
        let mut products = Vec::with_capacity(total);

        for document in documents {
            match decode(document) {
                Ok(product) => products.push(product),
                Err(e) if self.decode_policy == DecodePolicy::Fail => return Err(e),
                Err(e) => debug!(operation, error = %e, "skipping undecodable document"),
            }
        }

        let skipped = total - products.len();
        if skipped > 0 {
            warn!(operation, skipped, total, "dropped undecodable documents");
            metrics::record_undecodable(operation, skipped);
        }

        Ok(products)
    }
}

#[async_trait]
impl<I: DocumentIndex> ProductRepository for IndexedProductRepository<I> {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn put_product(&self, product: &Product) -> CatalogResult<()> {
        // JSON has no representation for NaN or infinity; serde_json writes null
        if !product.price.is_finite() {
            return Err(CatalogError::Index(format!(
                "encode product {}: non-finite price",
                product.id
            )));
        }

        let document = serde_json::to_value(ProductDocument::from(product))
            .map_err(|e| CatalogError::Index(format!("encode product {}: {}", product.id, e)))?;

        self.index
            .put(&self.collection, &product.id, document)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_product_by_id(&self, id: &str) -> CatalogResult<Product> {
        // An empty key would address the collection rather than a document
        if id.is_empty() {
            return Err(CatalogError::NotFound(String::new()));
        }

        let document = self
            .index
            .get(&self.collection, id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        // A point lookup always reports a bad document, whatever the policy
        decode(document)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn list_products_with_ids(&self, ids: &[String]) -> CatalogResult<Vec<Product>> {
        let ids: Vec<String> = ids.iter().filter(|id| !id.is_empty()).cloned().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let documents = self.index.multi_get(&self.collection, &ids).await?;
        self.decode_hits("multi_get", documents)
    }

    #[instrument(skip(self))]
    async fn list_products(&self, skip: u64, take: u64) -> CatalogResult<Vec<Product>> {
        let documents = self
            .index
            .query(&self.collection, &IndexQuery::MatchAll, skip, take)
            .await?;
        self.decode_hits("list", documents)
    }

    #[instrument(skip(self))]
    async fn search_products(
        &self,
        query: &str,
        skip: u64,
        take: u64,
    ) -> CatalogResult<Vec<Product>> {
        let documents = self
            .index
            .query(&self.collection, &IndexQuery::text_search(query), skip, take)
            .await?;
        self.decode_hits("search", documents)
    }
}
