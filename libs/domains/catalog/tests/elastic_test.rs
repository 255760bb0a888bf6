//! Integration tests against a real Elasticsearch node via testcontainers.
//!
//! Run with `cargo test -p domain_catalog -- --ignored` (requires Docker).

use database::elasticsearch::{ElasticConfig, connect_from_config};
use domain_catalog::*;
use serde_json::json;
use test_utils::assertions::{assert_same_items, assert_some};
use test_utils::{TestDataBuilder, TestElasticsearch};

async fn repository(
    es: &TestElasticsearch,
    builder: &TestDataBuilder,
) -> IndexedProductRepository<ElasticDocumentIndex> {
    let client = connect_from_config(&ElasticConfig::new(es.url()))
        .await
        .unwrap();
    // Searches must see writes immediately
    let index = ElasticDocumentIndex::new(client).with_refresh("true");
    let repository = IndexedProductRepository::new(index).with_collection(builder.collection());
    repository.init_collection().await.unwrap();
    repository
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_put_get_and_search() {
    let es = TestElasticsearch::new().await;
    let builder = TestDataBuilder::from_test_name("elastic_put_get_search");
    let repository = repository(&es, &builder).await;
    let service = CatalogService::new(repository);

    let widget = service
        .post_product("Widget".into(), "A blue widget".into(), builder.price(1))
        .await
        .unwrap();
    let gadget = service
        .post_product("Gadget".into(), "Red gadget".into(), builder.price(2))
        .await
        .unwrap();

    assert_eq!(service.get_product(&widget.id).await.unwrap(), widget);

    let hits = service.search_products("gadget", 0, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0], gadget);

    let found = service
        .get_products_by_ids(&[gadget.id.clone(), "missing".into(), widget.id.clone()])
        .await
        .unwrap();
    assert_same_items(
        found.into_iter().map(|p| p.id).collect(),
        vec![widget.id.clone(), gadget.id.clone()],
        "multi-get ids",
    );

    let all = service.get_products(0, 10).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_missing_product_is_not_found() {
    let es = TestElasticsearch::new().await;
    let builder = TestDataBuilder::from_test_name("elastic_missing");
    let repository = repository(&es, &builder).await;

    let err = repository.get_product_by_id("nope").await.unwrap_err();
    assert!(err.is_not_found());

    let empty = repository.list_products_with_ids(&[]).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_init_collection_is_idempotent() {
    let es = TestElasticsearch::new().await;
    let builder = TestDataBuilder::from_test_name("elastic_init_twice");
    let repository = repository(&es, &builder).await;

    repository.init_collection().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_undecodable_hits_are_skipped() {
    let es = TestElasticsearch::new().await;
    let builder = TestDataBuilder::from_test_name("elastic_skip_bad");
    let repository = repository(&es, &builder).await;

    let index = ElasticDocumentIndex::new(
        connect_from_config(&ElasticConfig::new(es.url()))
            .await
            .unwrap(),
    )
    .with_refresh("true");
    index
        .put(
            &builder.collection(),
            "legacy",
            json!({ "name": "Legacy gadget", "legacy_price": "12" }),
        )
        .await
        .unwrap();

    repository
        .put_product(&Product {
            id: "good".into(),
            name: "Good gadget".into(),
            description: String::new(),
            price: 3.0,
        })
        .await
        .unwrap();

    let hits = repository.search_products("gadget", 0, 100).await.unwrap();
    let hit = assert_some(hits.first().cloned(), "decodable hit");
    assert_eq!(hits.len(), 1);
    assert_eq!(hit.id, "good");
}
