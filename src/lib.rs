//! # product-api
//!
//! A CRUD REST API for product records on top of axum and SeaORM.
//!
//! Requests flow through a fixed pipeline:
//!
//! ```text
//! controller -> ProductService -> ProductMapper -> ProductRepository -> storage
//! ```
//!
//! and every failure is rendered by [`exception`] as a JSON body with a
//! `timestamp` and a `message`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_api::{AppState, router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = router(AppState::in_memory());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod exception;
pub mod extractors;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod modules;
pub mod openapi;
pub mod telemetry;

pub use app::{AppState, router};
pub use config::{AppConfig, ConfigService, StorageConfig};
pub use error::{ApiError, Result};
