// Catalog API endpoint functions.
// Typed methods for the product collection, single products, and image bytes.

use reqwest::header::CONTENT_TYPE;

use crate::error::Result;

use super::client::{CatalogClient, IMAGE_ACCEPT};
use super::types::{ImagePayload, Product, ProductsResponse};

impl CatalogClient {
    /// Fetch the full product collection. No paging parameters are sent.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.get("/products").await?;
        let body: ProductsResponse = response.json().await?;
        Ok(body.products)
    }

    /// Fetch a single product by identifier.
    pub async fn fetch_product(&self, id: u64) -> Result<Product> {
        let response = self.get(&format!("/products/{}", id)).await?;
        let product: Product = response.json().await?;
        Ok(product)
    }

    /// Fetch raw image bytes from an absolute URL, asking for an image type.
    pub async fn fetch_image(&self, url: &str) -> Result<ImagePayload> {
        let response = self.get_url_accepting(url, IMAGE_ACCEPT).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let bytes = response.bytes().await?.to_vec();
        Ok(ImagePayload {
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;

    use super::*;
    use crate::error::ShopfrontError;

    #[tokio::test]
    async fn test_fetch_products() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"products":[{"id":7,"title":"Desk","price":99.5,"images":[]}]}"#);
            })
            .await;

        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let products = client.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 7);
        assert_eq!(products[0].title, "Desk");
    }

    #[tokio::test]
    async fn test_fetch_product_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/999");
                then.status(404);
            })
            .await;

        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let result = client.fetch_product(999).await;
        assert!(matches!(result, Err(ShopfrontError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_image_keeps_content_type() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/img/1.png");
                then.status(200)
                    .header("content-type", "image/png")
                    .body([0x89u8, b'P', b'N', b'G']);
            })
            .await;

        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let payload = client
            .fetch_image(&server.url("/img/1.png"))
            .await
            .unwrap();
        assert_eq!(payload.content_type.as_deref(), Some("image/png"));
        assert_eq!(payload.bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_fetch_image_asks_for_image_types() {
        let server = MockServer::start_async().await;
        let strict_origin = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/img/2.jpg")
                    .header("accept", "image/*,*/*;q=0.8");
                then.status(200)
                    .header("content-type", "image/jpeg")
                    .body([0xffu8, 0xd8]);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/img/2.jpg")
                    .header("accept", "application/json");
                then.status(406);
            })
            .await;

        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let payload = client
            .fetch_image(&server.url("/img/2.jpg"))
            .await
            .unwrap();
        assert_eq!(payload.content_type.as_deref(), Some("image/jpeg"));
        strict_origin.assert_calls_async(1).await;
    }
}
