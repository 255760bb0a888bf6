use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_GRPC_PORT: u16 = 50051;

/// Listener configuration for a service exposing both HTTP and gRPC
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub grpc_port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            grpc_port: DEFAULT_GRPC_PORT,
        }
    }

    pub fn with_grpc_port(mut self, grpc_port: u16) -> Self {
        self.grpc_port = grpc_port;
        self
    }

    /// HTTP address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// gRPC socket address on the same host
    pub fn grpc_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.grpc_port)
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "HOST".to_string(),
                details: format!("{}", e),
            })
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    /// - GRPC_PORT: defaults to 50051
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", DEFAULT_HTTP_PORT)?;
        let grpc_port = env_parse("GRPC_PORT", DEFAULT_GRPC_PORT)?;

        Ok(Self {
            host,
            port,
            grpc_port,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_HTTP_PORT,
            grpc_port: DEFAULT_GRPC_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None::<&str>),
                ("GRPC_PORT", None::<&str>),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "0.0.0.0:8080");
                assert_eq!(config.grpc_port, 50051);
            },
        );
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                ("GRPC_PORT", Some("50100")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
                assert_eq!(
                    config.grpc_address().unwrap(),
                    "127.0.0.1:50100".parse().unwrap()
                );
            },
        );
    }

    #[test]
    fn test_server_config_from_env_port_out_of_range() {
        temp_env::with_var("PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_server_config_invalid_grpc_port() {
        temp_env::with_vars(
            [("PORT", None::<&str>), ("GRPC_PORT", Some("grpc"))],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("GRPC_PORT"));
            },
        );
    }

    #[test]
    fn test_grpc_address_rejects_hostname() {
        let config = ServerConfig::new("localhost".to_string(), 8080);
        assert!(config.grpc_address().is_err());
    }
}
