//! Product record types
//!
//! Field names on the wire and in the CSV file are the Portuguese ones
//! the service has always spoken (`nome`, `categoria`, `preco`); the
//! serde renames keep the Rust side in English.

use serde::{Deserialize, Serialize};

/// A catalog record. Identity is the `id`; there is no other
/// uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Non-negative by convention, unenforced.
    #[serde(rename = "preco")]
    pub price: f64,
}

/// The mutable fields of a product, as submitted by clients on create
/// and update. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl ProductDraft {
    /// Materializes the draft into a full record with the given id.
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}
