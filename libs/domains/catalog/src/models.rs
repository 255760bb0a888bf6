use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// K-sortable unique identifier, assigned at creation
    pub id: String,
    /// Human-readable label
    pub name: String,
    /// Free text, indexed for full-text search
    pub description: String,
    pub price: f64,
}

/// Document stored in the search index for a product.
///
/// The id is the document key and is never part of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

impl ProductDocument {
    /// Re-attach the document key as the product id
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Offset pagination for listings
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of products to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of products to return
    #[serde(default)]
    pub take: u64,
}

/// Full-text search parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text matched against name and description
    pub query: String,
    #[serde(default)]
    pub skip: u64,
    /// Page size; `0` together with `skip = 0` means the default page, values
    /// above 100 are clamped
    #[serde(default)]
    pub take: u64,
}

/// Body of a batched lookup
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductIds {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_never_carries_id() {
        let product = Product {
            id: "0192".to_string(),
            name: "Widget".to_string(),
            description: "A useful widget".to_string(),
            price: 9.99,
        };

        let value = serde_json::to_value(ProductDocument::from(&product)).unwrap();
        assert_eq!(
            value,
            json!({"name": "Widget", "description": "A useful widget", "price": 9.99})
        );
    }

    #[test]
    fn test_into_product_reattaches_key() {
        let document: ProductDocument =
            serde_json::from_value(json!({"name": "Lamp", "description": "", "price": 12}))
                .unwrap();
        let product = document.into_product("abc");
        assert_eq!(product.id, "abc");
        assert_eq!(product.price, 12.0);
    }

    #[test]
    fn test_create_product_validation() {
        let valid = CreateProduct {
            name: "Widget".to_string(),
            description: String::new(),
            price: 0.0,
        };
        assert!(valid.validate().is_ok());

        let negative = CreateProduct {
            price: -1.0,
            ..valid.clone()
        };
        assert!(negative.validate().is_err());

        let unnamed = CreateProduct {
            name: String::new(),
            ..valid
        };
        assert!(unnamed.validate().is_err());
    }
}
