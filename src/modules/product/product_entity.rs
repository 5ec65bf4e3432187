//! SeaORM mapping of the `products` table.

use super::model::Product;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

/// An unsaved product leaves the key unset so the database assigns it on INSERT;
/// a persisted one keeps its key unchanged so it drives the WHERE clause of an UPDATE.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: match product.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_product_leaves_key_unset() {
        let active = ActiveModel::from(Product::new("Pen", None, 1.5));
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Pen".to_string()));
    }

    #[test]
    fn test_persisted_product_keeps_key_unchanged() {
        let mut product = Product::new("Pen", Some("Blue ink".into()), 1.5);
        product.id = Some(7);
        let active = ActiveModel::from(product);
        assert_eq!(active.id, Unchanged(7));
        assert_eq!(active.description, Set(Some("Blue ink".to_string())));
    }
}
