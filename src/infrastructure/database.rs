use crate::modules::product::product_entity;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Opens the connection pool and makes sure the `products` table exists.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to exactly one.
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    if is_in_memory_sqlite(url) {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(max_connections);
    }
    options.sqlx_logging(false);

    tracing::info!("Database: opening connection pool");
    let db = Database::connect(options).await?;
    create_schema(&db).await?;
    tracing::info!("Database: connection pool ready");
    Ok(db)
}

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut products = schema.create_table_from_entity(product_entity::Entity);
    products.if_not_exists();
    db.execute(backend.build(&products)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(!is_in_memory_sqlite("sqlite://products.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://localhost/products"));
    }
}
