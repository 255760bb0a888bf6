use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors that can occur while building a gRPC channel
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[source] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection failed: {0}")]
  ConnectionFailed(#[source] tonic::transport::Error),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_) => tonic::Status::invalid_argument(err.to_string()),
      GrpcError::ConnectionFailed(_) => tonic::Status::unavailable(err.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tonic::transport::Endpoint;

  #[test]
  fn test_invalid_uri_maps_to_invalid_argument() {
    let err = Endpoint::from_shared("not a valid uri").unwrap_err();
    let status: tonic::Status = GrpcError::InvalidUri(err).into();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(status.message().starts_with("Invalid URI"));
  }
}
