//! Catalog Domain
//!
//! Products stored as documents in a search index, exposed over HTTP and gRPC.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ Handlers / gRPC      │  ← HTTP endpoints, tonic service, typed client
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Service              │  ← Id assignment, search pagination policy
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Repository           │  ← Product <-> document mapping, decode policy
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ DocumentIndex        │  ← Elasticsearch REST or in-memory
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::elasticsearch::connect;
//! use domain_catalog::{
//!     CatalogService, ElasticDocumentIndex, IndexedProductRepository, handlers,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = connect("http://localhost:9200").await?;
//!
//! let repository = IndexedProductRepository::new(ElasticDocumentIndex::new(client));
//! repository.init_collection().await?;
//!
//! let service = CatalogService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod elastic;
pub mod error;
pub mod grpc;
pub mod handlers;
pub mod id;
pub mod index;
pub mod indexed;
pub mod memory;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod service;

pub use elastic::ElasticDocumentIndex;
pub use error::{CatalogError, CatalogResult};
pub use grpc::{CatalogClient, CatalogGrpcService};
pub use handlers::ApiDoc;
pub use id::{IdGenerator, SequenceGenerator, UuidV7Generator};
pub use index::{DocumentIndex, IndexError, IndexQuery, IndexedDocument};
pub use indexed::{DEFAULT_COLLECTION, DecodePolicy, IndexedProductRepository};
pub use memory::InMemoryDocumentIndex;
pub use models::{CreateProduct, Pagination, Product, ProductIds, SearchQuery};
pub use repository::ProductRepository;
pub use service::{CatalogService, MAX_PAGE_SIZE, normalize_pagination};
