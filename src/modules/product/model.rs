use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// In-process product record.
///
/// `id` is `None` until the storage layer has assigned one; after that it never
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Product {
    /// Builds an unsaved product.
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Payload accepted by the create and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "Pen")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Blue ink")]
    pub description: Option<String>,
    #[schema(example = 1.5)]
    pub price: f64,
}

/// Full outbound representation, including the storage-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
