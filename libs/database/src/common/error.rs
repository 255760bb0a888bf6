/// Unified error type for store connection management
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Elasticsearch transport or protocol errors
    #[cfg(feature = "elasticsearch")]
    #[error("Elasticsearch error: {0}")]
    Elasticsearch(crate::elasticsearch::ElasticError),

    /// The store answered, but not in a way that proves it is usable
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Settings that can never succeed, no matter how often we retry
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatabaseError {
    /// Whether another connection attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        !matches!(self, DatabaseError::ConfigError(_))
    }
}

#[cfg(feature = "elasticsearch")]
impl From<crate::elasticsearch::ElasticError> for DatabaseError {
    fn from(err: crate::elasticsearch::ElasticError) -> Self {
        match err {
            crate::elasticsearch::ElasticError::InvalidUrl(msg) => DatabaseError::ConfigError(msg),
            other => DatabaseError::Elasticsearch(other),
        }
    }
}

/// Result type alias for store operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_not_transient() {
        assert!(!DatabaseError::ConfigError("bad url".into()).is_transient());
        assert!(DatabaseError::ConnectionFailed("refused".into()).is_transient());
    }

    #[cfg(feature = "elasticsearch")]
    #[test]
    fn test_invalid_url_maps_to_config_error() {
        let err: DatabaseError =
            crate::elasticsearch::ElasticError::InvalidUrl("not a url".into()).into();
        assert!(matches!(err, DatabaseError::ConfigError(_)));
    }
}
