//! In-process [`DocumentIndex`] used by tests and the `memory` backend.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::index::{DocumentIndex, IndexError, IndexQuery, IndexedDocument};

type Collection = BTreeMap<String, Value>;

/// Documents held in memory, one ordered map per collection.
///
/// Listing returns documents in key order. Text queries match when any
/// whitespace-separated query term equals a term of one of the requested
/// fields, ignoring case.
#[derive(Debug, Default)]
pub struct InMemoryDocumentIndex {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arbitrary JSON value at `id`, bypassing any schema
    pub async fn insert_raw(&self, collection: &str, id: &str, source: Value) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), source);
    }

    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn matches(source: &Value, query: &IndexQuery) -> bool {
    match query {
        IndexQuery::MatchAll => true,
        IndexQuery::MultiMatch { query, fields } => {
            let wanted: Vec<String> = terms(query).collect();
            fields
                .iter()
                .filter_map(|field| source.get(field).and_then(Value::as_str))
                .flat_map(terms)
                .any(|term| wanted.contains(&term))
        }
    }
}

#[async_trait]
impl DocumentIndex for InMemoryDocumentIndex {
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), IndexError> {
        self.insert_raw(collection, id, document).await;
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<IndexedDocument>, IndexError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|source| IndexedDocument {
                id: id.to_string(),
                source: source.clone(),
            }))
    }

    async fn multi_get(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<IndexedDocument>, IndexError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| {
                docs.get(id).map(|source| IndexedDocument {
                    id: id.clone(),
                    source: source.clone(),
                })
            })
            .collect())
    }

    async fn query(
        &self,
        collection: &str,
        query: &IndexQuery,
        from: u64,
        size: u64,
    ) -> Result<Vec<IndexedDocument>, IndexError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let from = usize::try_from(from).unwrap_or(usize::MAX);
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        Ok(docs
            .iter()
            .filter(|(_, source)| matches(source, query))
            .skip(from)
            .take(size)
            .map(|(id, source)| IndexedDocument {
                id: id.clone(),
                source: source.clone(),
            })
            .collect())
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), IndexError> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default();
        Ok(())
    }
}
