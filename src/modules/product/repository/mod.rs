mod in_memory_repository;
mod sea_orm_repository;

pub use in_memory_repository::InMemoryProductRepository;
pub use sea_orm_repository::SeaOrmProductRepository;

use super::model::Product;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("Product has no identifier; it has not been persisted")]
    MissingIdentifier,
}

/// Storage port for products, keyed by integer id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Absence is not an error; the caller decides what it means.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Inserts when `product.id` is `None`, otherwise updates the row with that id.
    /// Returns the stored record, with its id populated.
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn delete(&self, product: Product) -> Result<(), RepositoryError>;
}
