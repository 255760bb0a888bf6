//! Document index boundary.
//!
//! The catalog treats the search engine as an opaque store of JSON documents
//! grouped into named collections and addressed by key.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Fields searched by free-text queries
pub const TEXT_FIELDS: [&str; 2] = ["name", "description"];

#[derive(Debug, Clone, PartialEq)]
pub enum IndexQuery {
    /// Every document in the collection
    MatchAll,
    /// Text match of `query` against any of `fields`
    MultiMatch { query: String, fields: Vec<String> },
}

impl IndexQuery {
    /// Free-text query over the product name and description
    pub fn text_search(query: impl Into<String>) -> Self {
        IndexQuery::MultiMatch {
            query: query.into(),
            fields: TEXT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A stored document together with its key
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDocument {
    pub id: String,
    pub source: Value,
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("index returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed index response: {0}")]
    Envelope(String),
}

/// Capability set the catalog needs from a document store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    /// Insert or replace the document stored at `id`
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), IndexError>;

    /// Point lookup; `None` when nothing is stored at `id`
    async fn get(&self, collection: &str, id: &str) -> Result<Option<IndexedDocument>, IndexError>;

    /// Look up many keys in one round trip. Missing keys are omitted.
    async fn multi_get(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<IndexedDocument>, IndexError>;

    /// Run `query` and return hits `from..from + size`
    async fn query(
        &self,
        collection: &str,
        query: &IndexQuery,
        from: u64,
        size: u64,
    ) -> Result<Vec<IndexedDocument>, IndexError>;

    /// Create the collection with its field mappings if it does not exist
    async fn ensure_collection(&self, collection: &str) -> Result<(), IndexError>;
}
