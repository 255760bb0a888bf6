use reqwest::Method;
use serde::Deserialize;
use std::time::Instant;

use super::ElasticClient;

/// Health check status for Elasticsearch
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the cluster can serve reads and writes
    pub healthy: bool,
    /// `green`, `yellow` or `red` when the cluster answered
    pub cluster_status: Option<String>,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ClusterHealth {
    status: String,
}

/// `yellow` only means replicas are unassigned, which is normal for a
/// single-node cluster, so only `red` counts as unhealthy.
fn is_serving(cluster_status: &str) -> bool {
    !cluster_status.eq_ignore_ascii_case("red")
}

/// Check cluster health via `GET /_cluster/health`
pub async fn check_health(client: &ElasticClient) -> bool {
    check_health_detailed(client).await.healthy
}

/// Check cluster health with timing information and error details.
///
/// # Example
/// ```ignore
/// let status = check_health_detailed(&client).await;
/// if !status.healthy {
///     tracing::warn!(cluster = ?status.cluster_status, "Elasticsearch degraded: {:?}", status.message);
/// }
/// ```
pub async fn check_health_detailed(client: &ElasticClient) -> HealthStatus {
    let start = Instant::now();
    let result = fetch_cluster_health(client).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(health) => HealthStatus {
            healthy: is_serving(&health.status),
            message: None,
            cluster_status: Some(health.status),
            response_time_ms,
        },
        Err(message) => HealthStatus {
            healthy: false,
            cluster_status: None,
            message: Some(message),
            response_time_ms,
        },
    }
}

async fn fetch_cluster_health(client: &ElasticClient) -> Result<ClusterHealth, String> {
    let response = client
        .request(Method::GET, &["_cluster", "health"])
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body = response.bytes().await.map_err(|e| e.to_string())?;
    serde_json::from_slice(&body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elasticsearch::ElasticConfig;

    #[test]
    fn test_yellow_is_serving() {
        assert!(is_serving("green"));
        assert!(is_serving("yellow"));
        assert!(!is_serving("red"));
        assert!(!is_serving("RED"));
    }

    #[test]
    fn test_cluster_health_parses() {
        let health: ClusterHealth =
            serde_json::from_str(r#"{"cluster_name":"docker","status":"yellow","number_of_nodes":1}"#)
                .unwrap();
        assert_eq!(health.status, "yellow");
    }

    #[tokio::test]
    async fn test_unreachable_cluster_is_unhealthy() {
        let client = ElasticClient::from_config(&ElasticConfig::new("http://127.0.0.1:9")).unwrap();
        let status = check_health_detailed(&client).await;
        assert!(!status.healthy);
        assert!(status.cluster_status.is_none());
        assert!(status.message.is_some());
    }
}
