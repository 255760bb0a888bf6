//! Catalog API - REST and gRPC server over a document search index

use axum_helpers::server::{create_production_app, health_router, ShutdownCoordinator};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::elasticsearch::connect_from_config_with_retry;
use domain_catalog::{
    CatalogGrpcService, CatalogService, DocumentIndex, ElasticDocumentIndex,
    InMemoryDocumentIndex, IndexedProductRepository,
};
use eyre::eyre;
use std::time::Duration;
use tonic::transport::Server as TonicServer;
use tracing::{info, warn};

mod api;
mod config;
mod metrics;
mod openapi;
mod state;

use config::{Config, IndexBackend};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    metrics::init_metrics()?;

    match config.backend {
        IndexBackend::Elastic => {
            let elastic_config = config
                .elastic
                .clone()
                .ok_or_else(|| eyre!("elastic backend selected without Elasticsearch settings"))?;

            info!("Connecting to Elasticsearch at {}", elastic_config.url());
            let client = connect_from_config_with_retry(&elastic_config, None).await?;

            let mut index = ElasticDocumentIndex::new(client.clone());
            if let Some(policy) = &config.refresh {
                index = index.with_refresh(policy.clone());
            }

            run(AppState::new(config, Some(client)), index).await
        }
        IndexBackend::Memory => {
            warn!("Using the in-memory index; products are lost on restart");
            run(AppState::new(config, None), InMemoryDocumentIndex::new()).await
        }
    }
}

async fn run<I: DocumentIndex + 'static>(state: AppState, index: I) -> eyre::Result<()> {
    let repository = IndexedProductRepository::new(index)
        .with_collection(state.config.collection.clone())
        .with_decode_policy(state.config.decode_policy);

    repository.init_collection().await?;
    info!(
        collection = %repository.collection(),
        decode_policy = %repository.decode_policy(),
        "Catalog collection ready"
    );

    let service = CatalogService::new(repository);

    let coordinator = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    // gRPC server shares the shutdown coordinator with the REST server
    let grpc_addr = state.config.server.grpc_address()?;
    let grpc_service = CatalogGrpcService::new(service.clone());
    let grpc_coordinator = coordinator.clone();
    let grpc_handle = tokio::spawn(async move {
        info!("Starting gRPC server on {}", grpc_addr);
        let result = TonicServer::builder()
            .add_service(grpc_service.into_server())
            .serve_with_shutdown(grpc_addr, grpc_coordinator.wait())
            .await;

        if result.is_err() {
            grpc_coordinator.shutdown();
        }
        result.map_err(|e| eyre!("gRPC server error: {}", e))
    });

    // Build REST router
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(service)).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()))
        .merge(metrics::router());

    info!(
        "Starting Catalog API - REST on port {}, gRPC on port {}",
        state.config.server.port, state.config.server.grpc_port
    );

    let server_config = state.config.server.clone();
    let shutdown_timeout = Duration::from_secs(state.config.shutdown_timeout_secs);
    let rest_result = create_production_app(
        app,
        &server_config,
        coordinator,
        shutdown_timeout,
        async move {
            info!("Shutting down: releasing index client");
            drop(state);
        },
    )
    .await;

    let grpc_result = grpc_handle
        .await
        .map_err(|e| eyre!("gRPC task failed: {}", e))?;

    rest_result.map_err(|e| eyre!("Server error: {}", e))?;
    grpc_result?;

    info!("Catalog API shutdown complete");
    Ok(())
}
