// Load operations for the listing and detail views.
// Fetches products and mirrors primary images into the image store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::api::{CatalogClient, Product};
use crate::cache::{ImageStore, data_url, image_key};
use crate::error::Result;

/// Outcome of one listing load.
#[derive(Debug, Clone)]
pub struct Listing {
    pub products: Vec<Product>,
    /// Snapshot of cached image sources, keyed by product id.
    pub images: HashMap<u64, String>,
    /// Products whose image could not be cached during this load.
    pub image_failures: Vec<ImageFailure>,
    pub loaded_at: DateTime<Utc>,
}

/// A per-product image caching failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFailure {
    pub product_id: u64,
    pub message: String,
}

impl Listing {
    /// Display source for a product: cached data URL first, then the remote URL.
    pub fn image_source<'a>(&'a self, product: &'a Product) -> Option<&'a str> {
        self.images
            .get(&product.id)
            .map(String::as_str)
            .or_else(|| product.primary_image())
    }

    pub fn cached_count(&self) -> usize {
        self.images.len()
    }
}

/// Fetch the product collection and cache every product's primary image.
///
/// Only a collection failure fails the load. Image tasks run at most
/// `concurrency` at a time and all of them settle before this returns.
pub async fn load_listing(
    client: &CatalogClient,
    store: Arc<dyn ImageStore>,
    concurrency: usize,
) -> Result<Listing> {
    let products = client.fetch_products().await?;
    debug!(count = products.len(), "Fetched product collection");

    let results: Vec<(u64, Result<Option<String>>)> = stream::iter(products.iter().cloned())
        .map(|product| {
            let client = client.clone();
            let store = Arc::clone(&store);
            async move {
                let result = resolve_image(&client, store.as_ref(), &product).await;
                (product.id, result)
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut images = HashMap::new();
    let mut image_failures = Vec::new();
    for (product_id, result) in results {
        match result {
            Ok(Some(source)) => {
                images.insert(product_id, source);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(product_id, error = %e, "Failed to cache product image");
                image_failures.push(ImageFailure {
                    product_id,
                    message: e.to_string(),
                });
            }
        }
    }
    image_failures.sort_by_key(|f| f.product_id);

    info!(
        products = products.len(),
        cached = images.len(),
        failed = image_failures.len(),
        "Listing loaded"
    );

    Ok(Listing {
        products,
        images,
        image_failures,
        loaded_at: Utc::now(),
    })
}

/// Return the cached source for a product, filling the cache on a miss.
/// An unreadable entry counts as a miss and is overwritten.
async fn resolve_image(
    client: &CatalogClient,
    store: &dyn ImageStore,
    product: &Product,
) -> Result<Option<String>> {
    let key = image_key(product.id);
    match store.get(&key).await {
        Ok(Some(cached)) => {
            debug!(product_id = product.id, "Image cache hit");
            return Ok(Some(cached));
        }
        Ok(None) => {}
        Err(e) => {
            warn!(product_id = product.id, error = %e, "Unreadable cache entry, refetching");
        }
    }

    let Some(url) = product.primary_image() else {
        return Ok(None);
    };

    let payload = client.fetch_image(url).await?;
    let encoded = data_url::encode(&payload);
    store.put(&key, &encoded).await?;
    debug!(product_id = product.id, bytes = payload.bytes.len(), "Image cached");
    Ok(Some(encoded))
}

/// A single product with its display image source.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub image: Option<String>,
}

/// Fetch one product for the detail view. Reads the image store but never fills it.
pub async fn load_detail(
    client: &CatalogClient,
    store: &dyn ImageStore,
    id: u64,
) -> Result<ProductDetail> {
    let product = client.fetch_product(id).await?;
    let image = match store.get(&image_key(id)).await {
        Ok(Some(cached)) => Some(cached),
        Ok(None) => product.primary_image().map(str::to_string),
        Err(e) => {
            warn!(product_id = id, error = %e, "Image store read failed");
            product.primary_image().map(str::to_string)
        }
    };
    Ok(ProductDetail { product, image })
}
