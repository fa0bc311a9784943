// Detail view state.

use crate::catalog::ProductDetail;
use crate::error::{Result, ShopfrontError};

use super::loading::LoadingState;

/// Per-mount state for the detail view.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub id: u64,
    pub data: LoadingState<ProductDetail>,
    pub scroll: u16,
}

impl DetailState {
    /// Fresh state for a new mount; the load starts immediately.
    pub fn mounted(id: u64) -> Self {
        Self {
            id,
            data: LoadingState::Loading,
            scroll: 0,
        }
    }

    /// Apply the result of a load.
    pub fn finish_load(&mut self, result: Result<ProductDetail>) {
        self.data = match result {
            Ok(detail) => LoadingState::Loaded(detail),
            Err(ShopfrontError::NotFound(_)) => {
                LoadingState::Error(format!("Product {} not found", self.id))
            }
            Err(e) => {
                tracing::error!(product_id = self.id, error = %e, "Error fetching product");
                LoadingState::Error("Failed to load product.".to_string())
            }
        };
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
