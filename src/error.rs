use crate::modules::product::ProductError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Every failure a handler can produce.
///
/// Rendering lives in [`crate::exception`]; only [`ProductError::NotFound`] maps
/// to 404, anything else (routing fallbacks included) is a 500 carrying its own
/// description.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    #[error(transparent)]
    PathParam(#[from] PathRejection),

    #[error("No route found for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Request method '{method}' is not supported for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Product(ProductError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Product(ProductError::Repository(_))
            | ApiError::JsonBody(_)
            | ApiError::PathParam(_)
            | ApiError::RouteNotFound { .. }
            | ApiError::MethodNotAllowed { .. }
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
