// Catalog API HTTP client.
// Handles default headers, timeouts, and request/response status processing.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ShopfrontError};

/// Accept value for image requests; image origins may reject `application/json`.
pub const IMAGE_ACCEPT: &str = "image/*,*/*;q=0.8";

/// Maximum length of a response body carried into an error message.
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Catalog API client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("shopfront-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ShopfrontError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Make a GET request to an endpoint under the API base URL.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get_url(&url).await
    }

    /// Make a GET request to an absolute URL (image origins live outside the API).
    async fn get_url(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await.map_err(ShopfrontError::Api)?;
        check_response(response).await
    }

    /// GET an absolute URL, replacing the default `Accept` header.
    pub async fn get_url_accepting(&self, url: &str, accept: &'static str) -> Result<Response> {
        debug!(url, accept, "GET");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(accept))
            .send()
            .await
            .map_err(ShopfrontError::Api)?;
        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(ShopfrontError::NotFound(url))
        }
        status => {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY_LENGTH {
                let mut end = MAX_ERROR_BODY_LENGTH;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
                body.push_str("...");
            }
            Err(ShopfrontError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
