use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use tonic::{Code, Status};

use crate::index::IndexError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No document exists at the requested id
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Transport or protocol failure talking to the document index
    #[error("Index error: {0}")]
    Index(String),

    /// A document was retrieved but does not match the product schema
    #[error("Decode error: {0}")]
    Decode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl From<IndexError> for CatalogError {
    fn from(err: IndexError) -> Self {
        CatalogError::Index(err.to_string())
    }
}

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            CatalogError::Index(msg) => AppError::ServiceUnavailable(msg),
            CatalogError::Decode(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<CatalogError> for Status {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Status::not_found(id),
            CatalogError::Index(msg) => Status::unavailable(msg),
            CatalogError::Decode(msg) => Status::data_loss(msg),
        }
    }
}

/// Inverse of the server-side mapping so `NotFound` survives the network hop.
/// Any status without a catalog meaning is treated as an index failure.
impl From<Status> for CatalogError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::NotFound => CatalogError::NotFound(status.message().to_string()),
            Code::DataLoss => CatalogError::Decode(status.message().to_string()),
            _ => CatalogError::Index(status.message().to_string()),
        }
    }
}
