use super::ErrorMessageResponse;
use crate::error::ApiError;
use axum::{
    Json,
    body::Bytes,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use http_body_util::Full;
use std::any::Any;

/// Global translation of handler failures into `{timestamp, message}` bodies.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "request failed: {}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected: {}", message);
        }

        (status, Json(ErrorMessageResponse::new(message))).into_response()
    }
}

/// Fallback for paths with no route.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Turns a handler panic into a structured 500 for `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    tracing::error!("handler panicked: {}", message);

    let body = serde_json::to_vec(&ErrorMessageResponse::new(message)).unwrap_or_default();
    let mut response = axum::http::Response::new(Full::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::product::{ProductError, RepositoryError};
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorMessageResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError::from(ProductError::NotFound(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.message, "Product not found with id: 42");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_500_with_its_description() {
        let err = ProductError::Repository(RepositoryError::Database(sea_orm::DbErr::Custom(
            "connection reset".into(),
        )));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(body.message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_panic_response_is_structured() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorMessageResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "boom");
    }
}
