//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable catalog entry.
///
/// Products are supplied whole by an external data source and are immutable at
/// runtime. The cart captures a copy of the product at the time of first add
/// (the "snapshot"), so display data stays stable even if the catalog is
/// reloaded with different content in a later process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id within the catalog (assumed, not enforced).
    pub id: ProductId,
    /// Display name; also the haystack for text search.
    pub name: String,
    /// Unit price. Non-negative in well-formed catalogs.
    pub price: Price,
    /// Category name, compared case-sensitively by the query engine.
    pub category: String,
    /// Opaque image reference (a URL path in practice).
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let product = Product {
            id: ProductId::new(3),
            name: "Sweet Strawberries".to_string(),
            price: "45".parse().unwrap(),
            category: "Fruits".to_string(),
            image: "/static/images/strawberries.png".to_string(),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn deserializes_catalog_entry_shape() {
        let json = r#"{
            "id": 18,
            "name": "Organic Milk",
            "price": "21",
            "category": "Dairy",
            "image": "/static/images/milk.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(18));
        assert_eq!(product.price.to_string(), "$21.00");
    }
}
