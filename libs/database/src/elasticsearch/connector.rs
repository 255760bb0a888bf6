use reqwest::Method;
use tracing::info;

use super::{ElasticClient, ElasticConfig};
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_if};

/// Connect to an Elasticsearch endpoint and verify it answers
///
/// # Example
/// ```ignore
/// use database::elasticsearch::connect;
///
/// let client = connect("http://localhost:9200").await?;
/// ```
pub async fn connect(url: &str) -> DatabaseResult<ElasticClient> {
    connect_from_config(&ElasticConfig::new(url)).await
}

/// Connect using an ElasticConfig
///
/// Issues `GET /` and requires a success status, so a wrong port or a proxy
/// error page is reported at startup rather than on the first request.
pub async fn connect_from_config(config: &ElasticConfig) -> DatabaseResult<ElasticClient> {
    info!("Attempting to connect to Elasticsearch at {}", config.url);

    let client = ElasticClient::from_config(config)?;

    let response = client
        .request(Method::GET, &[])?
        .send()
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DatabaseError::ConnectionFailed(format!(
            "{} answered with HTTP {}",
            config.url, status
        )));
    }

    info!("Successfully connected to Elasticsearch");
    Ok(client)
}

/// Connect with automatic retry on failure
///
/// Configuration errors (such as an unparseable URL) fail immediately.
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<ElasticClient> {
    connect_from_config_with_retry(&ElasticConfig::new(url), retry_config).await
}

/// Connect from config with automatic retry on failure
///
/// # Example
/// ```ignore
/// use database::elasticsearch::{ElasticConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
/// use core_config::FromEnv;
///
/// let config = ElasticConfig::from_env()?;
/// let client = connect_from_config_with_retry(&config, Some(RetryConfig::new())).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &ElasticConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<ElasticClient> {
    retry_if(
        || connect_from_config(config),
        DatabaseError::is_transient,
        retry_config.unwrap_or_default(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url_without_retrying() {
        let started = std::time::Instant::now();
        let result = connect_with_retry("::not-a-url::", Some(RetryConfig::new())).await;

        assert!(matches!(result, Err(DatabaseError::ConfigError(_))));
        assert!(started.elapsed().as_millis() < 200);
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_failure() {
        // Port 9 (discard) is essentially never listening locally
        let config = ElasticConfig::new("http://127.0.0.1:9");
        let result = connect_from_config(&config).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionFailed(_))));
    }

    #[tokio::test]
    #[ignore] // Requires actual Elasticsearch
    async fn test_connect() {
        let url = std::env::var("ELASTICSEARCH_URL")
            .unwrap_or_else(|_| "http://localhost:9200".to_string());

        assert!(connect(&url).await.is_ok());
    }
}
