//! Core types for Storefront

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog product as served by the remote API
///
/// Only `id` and `title` are interpreted. Every other field the endpoint
/// sends (price, image, rating, ...) is kept verbatim in `extra` and
/// survives a serialize round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            extra: Map::new(),
        }
    }
}

/// A product copied into the cart when it was added
///
/// Entries hold no link back to the catalog. The same id may appear
/// more than once.
pub type CartEntry = Product;

/// Parse a catalog response body into products
pub fn parse_products(body: &[u8]) -> serde_json::Result<Vec<Product>> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_products() {
        let body = br#"[{"id":1,"title":"Shirt"},{"id":2,"title":"Hat"}]"#;
        let products = parse_products(body).unwrap();

        assert_eq!(products, vec![Product::new(1, "Shirt"), Product::new(2, "Hat")]);
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let body = br#"[{"id":7,"title":"Backpack","price":109.95,"rating":{"rate":3.9,"count":120}}]"#;
        let products = parse_products(body).unwrap();

        assert_eq!(products[0].extra["price"], serde_json::json!(109.95));
        assert_eq!(products[0].extra["rating"]["count"], serde_json::json!(120));

        let json = serde_json::to_value(&products[0]).unwrap();
        assert_eq!(json["price"], serde_json::json!(109.95));
        assert_eq!(json["title"], serde_json::json!("Backpack"));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let body = br#"[{"id":1}]"#;
        assert!(parse_products(body).is_err());
    }

    #[test]
    fn test_non_array_body_is_rejected() {
        let body = br#"{"id":1,"title":"Shirt"}"#;
        assert!(parse_products(body).is_err());
    }
}
