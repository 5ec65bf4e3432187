use super::{ProductRepository, RepositoryError};
use crate::modules::product::model::Product;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Map-backed storage. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i64, Product>>,
    last_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    /// Updating an id with no stored row fails with `RecordNotUpdated`, as the
    /// relational adapter does; rows are never created under a caller-chosen id.
    async fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.write().await;
        let id = match product.id {
            Some(id) if rows.contains_key(&id) => id,
            Some(_) => return Err(sea_orm::DbErr::RecordNotUpdated.into()),
            None => self.next_id(),
        };
        product.id = Some(id);

        rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete(&self, product: Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or(RepositoryError::MissingIdentifier)?;
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
