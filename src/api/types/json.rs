//! JSON extractors that report rejections in the API error format

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::UserPayload;

/// Wrapper around `axum::Json` whose rejections are [`ApiError`]s.
///
/// Malformed JSON and missing or mistyped fields are reported as
/// 400 Bad Request; a missing `Content-Type` as 415.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

/// Request bodies that carry their own field checks
pub trait ValidatePayload {
    fn check_payload(&self) -> Result<(), ApiError>;
}

impl ValidatePayload for UserPayload {
    fn check_payload(&self) -> Result<(), ApiError> {
        self.check().map_err(ApiError::from)
    }
}

/// JSON body that has been decoded and validated before the handler runs
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidatePayload,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.check_payload()?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> ApiError {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => {
            ApiError::bad_request(format!("Invalid JSON data: {}", err.body_text()))
                .with_param("body")
                .with_code("json_parse_error")
        }
        JsonSyntaxError(err) => {
            ApiError::bad_request(format!("Invalid JSON syntax: {}", err.body_text()))
                .with_code("json_parse_error")
        }
        MissingJsonContentType(_) => ApiError::unsupported_media_type(
            "Missing Content-Type header. Expected 'application/json'.",
        ),
        BytesRejection(err) => {
            ApiError::bad_request(format!("Failed to read request body: {}", err.body_text()))
        }
        _ => ApiError::bad_request("Invalid JSON request"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_is_extracted() {
        let req = json_request(r#"{"name":"Test User","email":"test@example.com"}"#);

        let ValidatedJson(payload) = ValidatedJson::<UserPayload>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(payload, UserPayload::new("Test User", "test@example.com"));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let req = json_request(r#"{"name":"Test User"}"#);

        let err = ValidatedJson::<UserPayload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, Some("json_parse_error".to_string()));
        assert!(err.response.error.message.contains("email"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let req = json_request(r#"{"name": "#);

        let err = ValidatedJson::<UserPayload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.error.message.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_invalid_email_is_bad_request() {
        let req = json_request(r#"{"name":"Test User","email":"not-an-email"}"#);

        let err = ValidatedJson::<UserPayload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.param, Some("email".to_string()));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"a","email":"a@example.com"}"#))
            .unwrap();

        let err = Json::<UserPayload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
