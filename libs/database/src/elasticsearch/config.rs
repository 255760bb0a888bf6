#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_parse};

/// Elasticsearch connection configuration
///
/// A single endpoint is always used; cluster node discovery ("sniffing") is
/// intentionally not supported because the cluster usually sits behind a
/// load balancer or a k8s service.
///
/// # Example
///
/// ```ignore
/// use database::elasticsearch::ElasticConfig;
///
/// let config = ElasticConfig::new("http://localhost:9200")
///     .with_basic_auth("elastic", "changeme");
/// ```
#[derive(Clone, Debug)]
pub struct ElasticConfig {
    /// Base URL of the cluster, e.g. `http://localhost:9200`
    pub url: String,

    /// Basic auth user (optional)
    pub username: Option<String>,

    /// Basic auth password (optional)
    pub password: Option<String>,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl ElasticConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            username: None,
            password: None,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Load ElasticConfig from environment variables
///
/// - `ELASTICSEARCH_URL` or `ELASTIC_URL` (required)
/// - `ELASTICSEARCH_USERNAME`, `ELASTICSEARCH_PASSWORD` (optional)
/// - `ELASTICSEARCH_REQUEST_TIMEOUT_SECS` (default: 30)
/// - `ELASTICSEARCH_CONNECT_TIMEOUT_SECS` (default: 10)
#[cfg(feature = "config")]
impl FromEnv for ElasticConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_optional("ELASTICSEARCH_URL")
            .or_else(|| env_optional("ELASTIC_URL"))
            .ok_or_else(|| {
                ConfigError::MissingEnvVar("ELASTICSEARCH_URL or ELASTIC_URL".to_string())
            })?;

        Ok(Self {
            url,
            username: env_optional("ELASTICSEARCH_USERNAME"),
            password: env_optional("ELASTICSEARCH_PASSWORD"),
            request_timeout_secs: env_parse("ELASTICSEARCH_REQUEST_TIMEOUT_SECS", 30)?,
            connect_timeout_secs: env_parse("ELASTICSEARCH_CONNECT_TIMEOUT_SECS", 10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elastic_config_new() {
        let config = ElasticConfig::new("http://search:9200");
        assert_eq!(config.url(), "http://search:9200");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.username.is_none());
    }

    #[test]
    fn test_elastic_config_with_basic_auth() {
        let config = ElasticConfig::default().with_basic_auth("elastic", "secret");
        assert_eq!(config.username.as_deref(), Some("elastic"));
        assert_eq!(config.password.as_deref(), Some("secret"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_elastic_config_from_env() {
        temp_env::with_vars(
            [
                ("ELASTICSEARCH_URL", Some("http://es:9200")),
                ("ELASTICSEARCH_USERNAME", Some("catalog")),
                ("ELASTICSEARCH_REQUEST_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ElasticConfig::from_env().unwrap();
                assert_eq!(config.url, "http://es:9200");
                assert_eq!(config.username.as_deref(), Some("catalog"));
                assert_eq!(config.request_timeout_secs, 5);
                assert_eq!(config.connect_timeout_secs, 10);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_elastic_config_from_env_fallback() {
        temp_env::with_vars(
            [
                ("ELASTICSEARCH_URL", None::<&str>),
                ("ELASTIC_URL", Some("http://fallback:9200")),
            ],
            || {
                let config = ElasticConfig::from_env().unwrap();
                assert_eq!(config.url, "http://fallback:9200");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_elastic_config_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("ELASTICSEARCH_URL", None::<&str>),
                ("ELASTIC_URL", None::<&str>),
            ],
            || {
                let err = ElasticConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("ELASTICSEARCH_URL"));
            },
        );
    }
}
