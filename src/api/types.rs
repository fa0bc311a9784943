// Catalog API types.
// Data structures for deserializing product feed responses.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    /// Image URLs; the first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: Option<u64>,
}

impl Product {
    /// The primary image URL, if the product has a non-empty one.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Price formatted for display.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Response wrapper for the product collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Raw image bytes along with the content type reported by the origin.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
