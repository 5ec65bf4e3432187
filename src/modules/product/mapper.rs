use super::model::{Product, ProductRequest, ProductResponse};

/// Stateless converter between the wire shapes and the stored entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// Builds a new, unsaved entity from a request.
    pub fn to_entity(&self, request: ProductRequest) -> Product {
        Product::new(request.name, request.description, request.price)
    }

    /// Projects an entity into its outbound shape.
    ///
    /// Returns `None` for an entity that has not been persisted yet, since a
    /// response always carries an id.
    pub fn to_response(&self, product: &Product) -> Option<ProductResponse> {
        let id = product.id?;
        Some(ProductResponse {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        })
    }

    /// Copies `name`, `description` and `price` onto an existing entity. The id is left alone.
    pub fn update_entity(&self, product: &mut Product, request: ProductRequest) {
        product.name = request.name;
        product.description = request.description;
        product.price = request.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: Option<&str>, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
            price,
        }
    }

    #[test]
    fn test_to_entity_has_no_id() {
        let mapper = ProductMapper::new();
        let product = mapper.to_entity(request("Pen", Some("Blue ink"), 1.5));

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Pen");
        assert_eq!(product.description.as_deref(), Some("Blue ink"));
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn test_to_response_requires_id() {
        let mapper = ProductMapper::new();
        let mut product = mapper.to_entity(request("Pen", None, 1.5));
        assert!(mapper.to_response(&product).is_none());

        product.id = Some(3);
        let response = mapper.to_response(&product).unwrap();
        assert_eq!(response.id, 3);
        assert_eq!(response.name, "Pen");
        assert_eq!(response.description, None);
        assert_eq!(response.price, 1.5);
    }

    #[test]
    fn test_update_entity_keeps_id() {
        let mapper = ProductMapper::new();
        let mut product = Product::new("Pen", Some("Blue ink".into()), 1.5);
        product.id = Some(9);

        mapper.update_entity(&mut product, request("Pencil", None, 0.75));

        assert_eq!(product.id, Some(9));
        assert_eq!(product.name, "Pencil");
        assert_eq!(product.description, None);
        assert_eq!(product.price, 0.75);
    }
}
