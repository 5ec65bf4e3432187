use super::{ProductRepository, RepositoryError};
use crate::modules::product::model::Product;
use crate::modules::product::product_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

/// Relational storage through SeaORM.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let model = product_entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let models = product_entity::Entity::find()
            .order_by_asc(product_entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let is_new = !product.is_persisted();
        let active = product_entity::ActiveModel::from(product);

        let model = if is_new {
            active.insert(&self.db).await?
        } else {
            active.update(&self.db).await?
        };

        tracing::debug!(id = model.id, inserted = is_new, "product row saved");
        Ok(Product::from(model))
    }

    async fn delete(&self, product: Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or(RepositoryError::MissingIdentifier)?;
        let result = product_entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        tracing::debug!(id, rows = result.rows_affected, "product row deleted");
        Ok(())
    }
}
