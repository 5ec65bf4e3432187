//! HTTP bindings for `/api/v1/products`.
//!
//! Handlers only translate between HTTP and [`ProductService`]; failures are
//! returned as [`crate::error::ApiError`] and rendered by the global error translation.

use super::model::{ProductRequest, ProductResponse};
use super::service::ProductService;
use crate::error::Result;
use crate::exception::ErrorMessageResponse;
use crate::extractors::{AppJson, AppPath};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

pub const BASE_PATH: &str = "/api/v1/products";

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "Every stored product", body = [ProductResponse]),
        (status = 500, description = "Unhandled failure", body = ErrorMessageResponse),
    )
)]
pub async fn get_all(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<Vec<ProductResponse>>> {
    Ok(Json(service.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No product with this id", body = ErrorMessageResponse),
    )
)]
pub async fn get_by_id(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ProductResponse>> {
    Ok(Json(service.get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 500, description = "Unhandled failure", body = ErrorMessageResponse),
    )
)]
pub async fn create(
    State(service): State<Arc<ProductService>>,
    AppJson(request): AppJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let created = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "No product with this id", body = ErrorMessageResponse),
    )
)]
pub async fn update(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    Ok(Json(service.update(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id", body = ErrorMessageResponse),
    )
)]
pub async fn delete(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
