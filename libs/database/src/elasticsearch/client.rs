use reqwest::{Method, RequestBuilder, Url};
use std::time::Duration;

use super::ElasticConfig;

/// Errors raised while building or sending requests to Elasticsearch
#[derive(Debug, thiserror::Error)]
pub enum ElasticError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid Elasticsearch URL: {0}")]
    InvalidUrl(String),
}

/// Thin handle over a pooled `reqwest::Client` bound to one cluster endpoint.
///
/// Cheap to clone; clones share the connection pool. Dropping the last clone
/// closes idle connections.
#[derive(Clone, Debug)]
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, Option<String>)>,
}

impl ElasticClient {
    /// Build a client without touching the network.
    pub fn from_config(config: &ElasticConfig) -> Result<Self, ElasticError> {
        let base_url = Url::parse(config.url.trim())
            .map_err(|e| ElasticError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ElasticError::InvalidUrl(config.url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        let credentials = config
            .username
            .clone()
            .map(|user| (user, config.password.clone()));

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for `segments` below the base, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ElasticError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ElasticError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request with auth already applied.
    pub fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ElasticError> {
        let url = self.url(segments)?;
        let builder = self.http.request(method, url);

        Ok(match &self.credentials {
            Some((user, password)) => builder.basic_auth(user, password.as_deref()),
            None => builder,
        })
    }
}
