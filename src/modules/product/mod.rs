pub mod controller;
pub mod mapper;
pub mod model;
pub mod product_entity;
pub mod repository;
pub mod service;

pub use mapper::ProductMapper;
pub use model::{Product, ProductRequest, ProductResponse};
pub use repository::{
    InMemoryProductRepository, ProductRepository, RepositoryError, SeaOrmProductRepository,
};
pub use service::{ProductError, ProductService};
