//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Body parse failures are rejected as [`AppError::JsonExtractorRejection`]
/// and failed `Validate` checks as [`AppError::ValidationError`], so both
/// render the standard error body.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProduct>) -> impl IntoResponse {
///     // `input` has already passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    async fn handler(ValidatedJson(input): ValidatedJson<Named>) -> String {
        input.name
    }

    fn request(body: &'static str) -> axum::http::Request<Body> {
        axum::http::Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let app = Router::new().route("/", post(handler));
        let response = app.oneshot(request(r#"{"name":"x"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_body_is_bad_request() {
        let app = Router::new().route("/", post(handler));
        let response = app.oneshot(request(r#"{"name":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = Router::new().route("/", post(handler));
        let response = app.oneshot(request("{")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
