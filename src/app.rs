//! Composition root and route table.

use crate::exception;
use crate::interceptor;
use crate::modules::product::controller::{self, BASE_PATH};
use crate::modules::product::{
    InMemoryProductRepository, ProductMapper, ProductRepository, ProductService,
};
use crate::openapi::{self, API_DOCS_PATH};
use axum::extract::FromRef;
use axum::routing::get;
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state, assembled once at startup.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(repository, ProductMapper::new())),
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }
}

/// Builds the full router:
///
/// | Method | Path                    | Handler               |
/// |--------|-------------------------|-----------------------|
/// | GET    | `/api/v1/products`      | [`controller::get_all`]   |
/// | POST   | `/api/v1/products`      | [`controller::create`]    |
/// | GET    | `/api/v1/products/{id}` | [`controller::get_by_id`] |
/// | PUT    | `/api/v1/products/{id}` | [`controller::update`]    |
/// | DELETE | `/api/v1/products/{id}` | [`controller::delete`]    |
/// | GET    | `/v3/api-docs`          | [`openapi::api_docs`]     |
pub fn router(state: AppState) -> Router {
    let item_path = format!("{BASE_PATH}/{{id}}");

    Router::new()
        .route(BASE_PATH, get(controller::get_all).post(controller::create))
        .route(
            &item_path,
            get(controller::get_by_id)
                .put(controller::update)
                .delete(controller::delete),
        )
        .route(API_DOCS_PATH, get(openapi::api_docs))
        .method_not_allowed_fallback(exception::method_not_allowed)
        .fallback(exception::route_not_found)
        .layer(middleware::from_fn(interceptor::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(exception::panic_response))
        .with_state(state)
}
