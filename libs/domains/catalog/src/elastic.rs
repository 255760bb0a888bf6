//! Elasticsearch-backed [`DocumentIndex`] over the REST API.
//!
//! Every document lives under the single `_doc` type of its collection. The
//! client talks to the one configured endpoint; there is no node sniffing.

use async_trait::async_trait;
use database::elasticsearch::{ElasticClient, ElasticError, Method, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::index::{DocumentIndex, IndexError, IndexQuery, IndexedDocument};

const DOC_TYPE: &str = "_doc";

impl From<ElasticError> for IndexError {
    fn from(err: ElasticError) -> Self {
        IndexError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            IndexError::Envelope(err.to_string())
        } else {
            IndexError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    found: bool,
    #[serde(rename = "_source", default)]
    source: Option<Value>,
}

impl GetResponse {
    fn into_document(self) -> Option<IndexedDocument> {
        self.found.then(|| IndexedDocument {
            id: self.id,
            source: self.source.unwrap_or(Value::Null),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MultiGetResponse {
    docs: Vec<GetResponse>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source", default)]
    source: Option<Value>,
}

fn parse<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<T, IndexError> {
    serde_json::from_slice(body).map_err(|e| IndexError::Envelope(e.to_string()))
}

fn query_body(query: &IndexQuery, from: u64, size: u64) -> Value {
    let query = match query {
        IndexQuery::MatchAll => json!({ "match_all": {} }),
        IndexQuery::MultiMatch { query, fields } => json!({
            "multi_match": { "query": query, "fields": fields }
        }),
    };
    json!({ "query": query, "from": from, "size": size })
}

fn collection_mappings() -> Value {
    json!({
        "mappings": {
            "properties": {
                "name": { "type": "text" },
                "description": { "type": "text" },
                "price": { "type": "double" }
            }
        }
    })
}

/// [`DocumentIndex`] backed by an Elasticsearch cluster
#[derive(Debug, Clone)]
pub struct ElasticDocumentIndex {
    client: ElasticClient,
    refresh: Option<String>,
}

impl ElasticDocumentIndex {
    pub fn new(client: ElasticClient) -> Self {
        Self {
            client,
            refresh: None,
        }
    }

    /// Refresh policy sent with writes (`true`, `wait_for`, `false`)
    pub fn with_refresh(mut self, policy: impl Into<String>) -> Self {
        self.refresh = Some(policy.into());
        self
    }

    pub fn client(&self) -> &ElasticClient {
        &self.client
    }

    /// Send the request and return the body of a successful response. Non-2xx
    /// statuses listed in `accept` are passed through instead of failing.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        accept: &[StatusCode],
    ) -> Result<(StatusCode, Vec<u8>), IndexError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status.is_success() || accept.contains(&status) {
            Ok((status, body))
        } else {
            Err(IndexError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }
}

#[async_trait]
impl DocumentIndex for ElasticDocumentIndex {
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), IndexError> {
        let mut request = self
            .client
            .request(Method::PUT, &[collection, DOC_TYPE, id])?
            .json(&document);
        if let Some(policy) = &self.refresh {
            request = request.query(&[("refresh", policy.as_str())]);
        }

        self.send(request, &[]).await?;
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<IndexedDocument>, IndexError> {
        let request = self.client.request(Method::GET, &[collection, DOC_TYPE, id])?;
        let (status, body) = self.send(request, &[StatusCode::NOT_FOUND]).await?;

        if status == StatusCode::NOT_FOUND {
            // A missing collection also answers 404, but with an error body
            return match parse::<GetResponse>(&body) {
                Ok(response) if !response.found => Ok(None),
                _ => Err(IndexError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                }),
            };
        }

        Ok(parse::<GetResponse>(&body)?.into_document())
    }

    async fn multi_get(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<IndexedDocument>, IndexError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let request = self
            .client
            .request(Method::POST, &[collection, "_mget"])?
            .json(&json!({ "ids": ids }));
        let (_, body) = self.send(request, &[]).await?;

        let response: MultiGetResponse = parse(&body)?;
        let documents: Vec<_> = response
            .docs
            .into_iter()
            .filter_map(GetResponse::into_document)
            .collect();

        debug!(requested = ids.len(), found = documents.len(), "multi-get");
        Ok(documents)
    }

    async fn query(
        &self,
        collection: &str,
        query: &IndexQuery,
        from: u64,
        size: u64,
    ) -> Result<Vec<IndexedDocument>, IndexError> {
        let request = self
            .client
            .request(Method::POST, &[collection, "_search"])?
            .json(&query_body(query, from, size));
        let (_, body) = self.send(request, &[]).await?;

        let response: SearchResponse = parse(&body)?;
        Ok(response
            .hits
            .hits
            .into_iter()
            .map(|hit| IndexedDocument {
                id: hit.id,
                source: hit.source.unwrap_or(Value::Null),
            })
            .collect())
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), IndexError> {
        let exists = self.client.request(Method::HEAD, &[collection])?;
        let (status, _) = self.send(exists, &[StatusCode::NOT_FOUND]).await?;
        if status.is_success() {
            debug!(collection, "collection exists");
            return Ok(());
        }

        let create = self
            .client
            .request(Method::PUT, &[collection])?
            .json(&collection_mappings());
        match self.send(create, &[]).await {
            Ok(_) => {
                info!(collection, "created collection");
                Ok(())
            }
            // Another instance won the race
            Err(IndexError::Status { status: 400, body })
                if body.contains("resource_already_exists_exception") =>
            {
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
