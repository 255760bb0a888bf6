//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; `/ready`
//! additionally asks the cluster for its health when the elastic backend is
//! in use.

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::elasticsearch::{check_health_detailed, ElasticClient};

use crate::state::AppState;

async fn elasticsearch_ready(client: &ElasticClient) -> Result<(), String> {
    let status = check_health_detailed(client).await;
    if status.healthy {
        return Ok(());
    }

    Err(status.message.unwrap_or_else(|| {
        format!(
            "cluster status {}",
            status.cluster_status.as_deref().unwrap_or("unknown")
        )
    }))
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();
    if let Some(client) = &state.elastic {
        checks.push((
            "elasticsearch",
            Box::pin(elasticsearch_ready(client)) as HealthCheckFuture<'_>,
        ));
    }

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, IndexBackend};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::server::ServerConfig;
    use database::elasticsearch::ElasticConfig;
    use domain_catalog::DecodePolicy;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn config(backend: IndexBackend) -> Config {
        Config {
            app: core_config::app_info!(),
            environment: Environment::Development,
            server: ServerConfig::default(),
            backend,
            elastic: None,
            collection: "catalog".to_string(),
            decode_policy: DecodePolicy::Skip,
            refresh: None,
            shutdown_timeout_secs: 30,
        }
    }

    async fn call_ready(state: AppState) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_memory_backend_is_always_ready() {
        let (status, body) = call_ready(AppState::new(config(IndexBackend::Memory), None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_unreachable_cluster_is_not_ready() {
        let client = ElasticClient::from_config(&ElasticConfig::new("http://127.0.0.1:9")).unwrap();
        let state = AppState::new(config(IndexBackend::Elastic), Some(client));

        let (status, body) = call_ready(state).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["elasticsearch"], "disconnected");
        assert_eq!(body["status"], "not ready");
    }
}
