//! Catalog product record.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable after seed load: no action in this service
/// creates, updates, or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Creates a product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: Some(category.into()),
        }
    }

    /// Case-insensitive substring containment against the product name.
    ///
    /// This is the single matching policy for both search and order-creation
    /// resolution: a query like "jacket" matches every jacket-named product.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parka() -> Product {
        Product::new(
            "201",
            "Men's Parka Jacket",
            Money::from_units(150),
            "Men's Winter Clothing",
        )
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let product = parka();
        assert!(product.name_matches("parka"));
        assert!(product.name_matches("PARKA"));
        assert!(product.name_matches("Men's Parka Jacket"));
    }

    #[test]
    fn name_match_is_substring_not_equality() {
        let product = parka();
        assert!(product.name_matches("jacket"));
        assert!(!product.name_matches("gloves"));
    }

    #[test]
    fn serializes_price_as_plain_number() {
        let json = serde_json::to_value(parka()).unwrap();
        assert_eq!(json["id"], "201");
        assert_eq!(json["price"], 150);
        assert_eq!(json["category"], "Men's Winter Clothing");
    }
}
