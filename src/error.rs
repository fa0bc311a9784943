// Error types for shopfront.
// Covers catalog API errors, image store errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopfrontError {
    #[error("Catalog API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image store error for {key}: {message}")]
    Store { key: String, message: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ShopfrontError>;
