//! Configuration for Catalog API

use core_config::{app_info, env_optional, env_or_default, env_parse, server::ServerConfig, AppInfo, FromEnv};
use database::elasticsearch::ElasticConfig;
use domain_catalog::{DecodePolicy, DEFAULT_COLLECTION};
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Which document index the service runs against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IndexBackend {
    #[default]
    Elastic,
    /// Process-local index, empty on every start
    Memory,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub backend: IndexBackend,
    /// Present only for the elastic backend
    pub elastic: Option<ElasticConfig>,
    pub collection: String,
    pub decode_policy: DecodePolicy,
    /// Refresh policy sent with writes, e.g. `wait_for`
    pub refresh: Option<String>,
    pub shutdown_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let backend: IndexBackend = env_parse("CATALOG_INDEX_BACKEND", IndexBackend::default())?;

        let elastic = match backend {
            IndexBackend::Elastic => Some(ElasticConfig::from_env()?),
            IndexBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            backend,
            elastic,
            collection: env_or_default("CATALOG_INDEX", DEFAULT_COLLECTION),
            decode_policy: env_parse("CATALOG_DECODE_POLICY", DecodePolicy::default())?,
            refresh: env_optional("CATALOG_INDEX_REFRESH"),
            shutdown_timeout_secs: env_parse("SHUTDOWN_TIMEOUT_SECS", 30)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_for_elastic_backend() {
        temp_env::with_vars(
            [
                ("ELASTICSEARCH_URL", Some("http://es:9200")),
                ("CATALOG_INDEX_BACKEND", None),
                ("CATALOG_INDEX", None),
                ("CATALOG_DECODE_POLICY", None),
                ("CATALOG_INDEX_REFRESH", None),
                ("PORT", None),
                ("GRPC_PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.backend, IndexBackend::Elastic);
                assert_eq!(config.elastic.unwrap().url, "http://es:9200");
                assert_eq!(config.collection, "catalog");
                assert_eq!(config.decode_policy, DecodePolicy::Skip);
                assert!(config.refresh.is_none());
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.grpc_port, 50051);
            },
        );
    }

    #[test]
    fn test_elastic_backend_requires_url() {
        temp_env::with_vars(
            [
                ("CATALOG_INDEX_BACKEND", None::<&str>),
                ("ELASTICSEARCH_URL", None),
                ("ELASTIC_URL", None),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_memory_backend_needs_no_cluster() {
        temp_env::with_vars(
            [
                ("CATALOG_INDEX_BACKEND", Some("Memory")),
                ("ELASTICSEARCH_URL", None),
                ("ELASTIC_URL", None),
                ("CATALOG_DECODE_POLICY", Some("fail")),
                ("CATALOG_INDEX", Some("products-v2")),
                ("CATALOG_INDEX_REFRESH", Some("wait_for")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.backend, IndexBackend::Memory);
                assert!(config.elastic.is_none());
                assert_eq!(config.decode_policy, DecodePolicy::Fail);
                assert_eq!(config.collection, "products-v2");
                assert_eq!(config.refresh.as_deref(), Some("wait_for"));
            },
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        temp_env::with_var("CATALOG_INDEX_BACKEND", Some("mongodb"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
