//! Product DTOs as seen by API consumers.
//!
//! Defined independently of the `product-api` crate so the client carries no
//! server dependencies; the integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A stored product returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Payload for creating a product. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
        }
    }
}
