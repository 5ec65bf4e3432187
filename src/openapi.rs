use crate::exception::ErrorMessageResponse;
use crate::modules::product::controller;
use crate::modules::product::{ProductRequest, ProductResponse};
use axum::Json;
use utoipa::OpenApi;

pub const API_DOCS_PATH: &str = "/v3/api-docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Management API",
        version = "1.0",
        description = "REST API for managing products"
    ),
    paths(
        controller::get_all,
        controller::get_by_id,
        controller::create,
        controller::update,
        controller::delete,
    ),
    components(schemas(ProductRequest, ProductResponse, ErrorMessageResponse)),
    tags((name = "products", description = "Product CRUD operations"))
)]
pub struct ApiDoc;

pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
