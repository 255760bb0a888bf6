//! gRPC round-trip tests: a real tonic server over the in-memory index,
//! called through `CatalogClient`.

use std::sync::Arc;

use domain_catalog::*;
use serde_json::json;
use test_utils::assertions::assert_same_items;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

struct Harness {
    client: CatalogClient,
    index: Arc<InMemoryDocumentIndex>,
}

async fn spawn_catalog() -> Harness {
    let index = Arc::new(InMemoryDocumentIndex::new());
    let repository = IndexedProductRepository::from_arc(Arc::clone(&index));
    let service =
        CatalogService::with_id_generator(repository, Arc::new(SequenceGenerator::new("p-")));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(CatalogGrpcService::new(service).into_server())
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    let client = CatalogClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    Harness { client, index }
}

#[tokio::test]
async fn test_create_then_get_over_grpc() {
    let h = spawn_catalog().await;

    let created = h
        .client
        .create_product("Widget", "A blue widget", 9.5)
        .await
        .unwrap();
    assert_eq!(created.id, "p-00000000000000000001");

    let fetched = h.client.get_product(created.id.clone()).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_not_found_survives_the_network() {
    let h = spawn_catalog().await;

    let err = h.client.get_product("nope").await.unwrap_err();

    assert!(err.is_not_found(), "expected NotFound, got {:?}", err);
}

#[tokio::test]
async fn test_undecodable_document_is_decode_error() {
    let h = spawn_catalog().await;
    h.index
        .insert_raw(DEFAULT_COLLECTION, "bad", json!({ "name": 42 }))
        .await;

    let err = h.client.get_product("bad").await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_search_list_and_batch_over_grpc() {
    let h = spawn_catalog().await;
    let widget = h
        .client
        .create_product("Widget", "A blue widget", 9.5)
        .await
        .unwrap();
    let gadget = h
        .client
        .create_product("Gadget", "Red gadget", 20.0)
        .await
        .unwrap();

    let hits = h.client.search_products("gadget", 0, 0).await.unwrap();
    assert_eq!(hits, vec![gadget.clone()]);

    let page = h.client.list_products(0, 10).await.unwrap();
    assert_eq!(page, vec![widget.clone(), gadget.clone()]);

    let found = h
        .client
        .get_products_by_ids(vec![gadget.id.clone(), "missing".into(), widget.id.clone()])
        .await
        .unwrap();
    assert_same_items(
        found.into_iter().map(|p| p.id).collect(),
        vec![widget.id, gadget.id],
        "batch ids",
    );
}

#[tokio::test]
async fn test_grpc_skips_price_validation() {
    // Validation lives at the HTTP edge; the gRPC surface stores what it gets
    let h = spawn_catalog().await;

    let created = h.client.create_product("Refund", "", -5.0).await.unwrap();

    assert_eq!(created.price, -5.0);
}

#[tokio::test]
async fn test_empty_id_is_not_found_over_grpc() {
    let h = spawn_catalog().await;

    let err = h.client.get_product("").await.unwrap_err();

    assert!(err.is_not_found(), "expected NotFound, got {:?}", err);
}

#[tokio::test]
async fn test_infinite_price_is_rejected_over_grpc() {
    let h = spawn_catalog().await;

    let err = h
        .client
        .create_product("Big", "", f64::INFINITY)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Index(_)));
    assert_eq!(h.index.len(DEFAULT_COLLECTION).await, 0);
}
