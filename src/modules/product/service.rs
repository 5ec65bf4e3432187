use super::mapper::ProductMapper;
use super::model::{Product, ProductRequest, ProductResponse};
use super::repository::{ProductRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with id: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ProductError>;

/// Product use cases. Every call touches at most one entity and keeps no state
/// between calls.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    mapper: ProductMapper,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, mapper: ProductMapper) -> Self {
        Self { repository, mapper }
    }

    pub async fn create(&self, request: ProductRequest) -> Result<ProductResponse> {
        let entity = self.mapper.to_entity(request);
        let saved = self.repository.save(entity).await?;
        tracing::info!(id = ?saved.id, "product created");
        self.respond(&saved)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProductResponse> {
        let product = self.find_existing(id).await?;
        self.respond(&product)
    }

    /// Keeps whatever order the repository returns.
    pub async fn get_all(&self) -> Result<Vec<ProductResponse>> {
        let products = self.repository.find_all().await?;
        products.iter().map(|product| self.respond(product)).collect()
    }

    pub async fn update(&self, id: i64, request: ProductRequest) -> Result<ProductResponse> {
        let mut product = self.find_existing(id).await?;
        self.mapper.update_entity(&mut product, request);
        let saved = self.repository.save(product).await?;
        tracing::info!(id, "product updated");
        self.respond(&saved)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let product = self.find_existing(id).await?;
        self.repository.delete(product).await?;
        tracing::info!(id, "product deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    fn respond(&self, product: &Product) -> Result<ProductResponse> {
        self.mapper
            .to_response(product)
            .ok_or(ProductError::Repository(RepositoryError::MissingIdentifier))
    }
}
