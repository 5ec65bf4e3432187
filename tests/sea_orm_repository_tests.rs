use product_api::infrastructure::database;
use product_api::modules::product::{
    Product, ProductRepository, RepositoryError, SeaOrmProductRepository,
};
use product_api::{AppState, router};
use std::sync::Arc;

async fn repository() -> SeaOrmProductRepository {
    let db = database::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory SQLite");
    SeaOrmProductRepository::new(db)
}

#[tokio::test]
async fn test_save_inserts_and_assigns_id() {
    let repo = repository().await;

    let saved = repo
        .save(Product::new("Pen", Some("Blue ink".into()), 1.5))
        .await
        .unwrap();

    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.name, "Pen");
    assert_eq!(saved.description.as_deref(), Some("Blue ink"));
    assert_eq!(saved.price, 1.5);
    assert_eq!(repo.find_by_id(1).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn test_save_with_id_updates_existing_row() {
    let repo = repository().await;
    let mut saved = repo.save(Product::new("Pen", None, 1.5)).await.unwrap();

    saved.name = "Fountain pen".to_string();
    saved.price = 12.0;
    let updated = repo.save(saved.clone()).await.unwrap();

    assert_eq!(updated, saved);
    assert_eq!(repo.find_all().await.unwrap(), vec![updated]);
}

#[tokio::test]
async fn test_find_all_returns_rows_in_id_order() {
    let repo = repository().await;
    for (name, price) in [("Pen", 1.5), ("Ink", 3.0), ("Paper", 0.5)] {
        repo.save(Product::new(name, None, price)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Pen", "Ink", "Paper"]);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let repo = repository().await;
    let saved = repo.save(Product::new("Pen", None, 1.5)).await.unwrap();

    repo.delete(saved).await.unwrap();

    assert_eq!(repo.find_by_id(1).await.unwrap(), None);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unsaved_product_is_rejected() {
    let repo = repository().await;

    let err = repo
        .delete(Product::new("Pen", None, 1.5))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::MissingIdentifier));
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let db = database::connect("sqlite::memory:", 1).await.unwrap();
    database::create_schema(&db).await.unwrap();
}

#[tokio::test]
async fn test_router_over_sqlite() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    let app = router(AppState::new(Arc::new(repository().await)));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/products")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Pen","price":1.5}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
