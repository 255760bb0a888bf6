//! Elasticsearch test infrastructure
//!
//! Provides a `TestElasticsearch` helper that runs a single-node cluster in a
//! container for the duration of a test.

use std::time::Duration;

use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::elastic_search::ElasticSearch;

const HTTP_PORT: u16 = 9200;

/// Test Elasticsearch wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestElasticsearch;
///
/// # async fn example() {
/// let es = TestElasticsearch::new().await;
/// let url = es.url();
/// // Point an Elasticsearch client at `url`
/// # }
/// ```
pub struct TestElasticsearch {
    #[allow(dead_code)]
    container: ContainerAsync<ElasticSearch>,
    url: String,
}

impl TestElasticsearch {
    /// Start a single-node cluster and wait until it answers HTTP requests
    pub async fn new() -> Self {
        let container = ElasticSearch::default()
            .start()
            .await
            .expect("Failed to start Elasticsearch container");

        let host_port = container
            .get_host_port_ipv4(HTTP_PORT)
            .await
            .expect("Failed to get Elasticsearch port");

        let url = format!("http://127.0.0.1:{}", host_port);

        wait_until_listening(host_port).await;
        tracing::info!(port = host_port, "Test Elasticsearch ready");

        Self { container, url }
    }

    /// Base URL of the cluster, e.g. `http://127.0.0.1:49153`
    pub fn url(&self) -> &str {
        &self.url
    }
}

// The log line the image waits for can precede the HTTP listener by a moment
async fn wait_until_listening(port: u16) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    panic!("Elasticsearch did not start listening on port {}", port);
}

impl Drop for TestElasticsearch {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test Elasticsearch container");
    }
}
