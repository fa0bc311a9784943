// Listing view state.
// Holds the loaded products, the image snapshot, and the grid selection.

use tracing::error;

use crate::catalog::Listing;
use crate::error::Result;
use crate::router::Route;

use super::loading::LoadingState;

/// Message shown when the product collection cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products.";

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub id: u64,
    pub title: &'a str,
    pub price: String,
    /// Cached data URL, else the remote primary URL.
    pub image: Option<&'a str>,
}

/// Per-mount state for the listing view.
#[derive(Debug, Clone)]
pub struct ListingState {
    pub data: LoadingState<Listing>,
    selected: usize,
    columns: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            selected: 0,
            columns: 1,
        }
    }
}

impl ListingState {
    /// Fresh state for a new mount; the load starts immediately.
    pub fn mounted() -> Self {
        Self {
            data: LoadingState::Loading,
            ..Self::default()
        }
    }

    /// Apply the result of a load.
    pub fn finish_load(&mut self, result: Result<Listing>) {
        match result {
            Ok(listing) => {
                self.data = LoadingState::Loaded(listing);
                self.selected = 0;
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                self.data = LoadingState::Error(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Cards for every loaded product, in feed order.
    pub fn cards(&self) -> Vec<Card<'_>> {
        let Some(listing) = self.data.data() else {
            return Vec::new();
        };
        listing
            .products
            .iter()
            .map(|product| Card {
                id: product.id,
                title: &product.title,
                price: product.price_label(),
                image: listing.image_source(product),
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.data.data().map_or(0, |listing| listing.products.len())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Update the column count after a layout change, keeping the selection.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move one row down, landing on the last card if the row below is short.
    pub fn select_down(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let target = self.selected + self.columns;
        let last_row_start = (len - 1) / self.columns * self.columns;
        if target < len {
            self.selected = target;
        } else if self.selected < last_row_start {
            self.selected = len - 1;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// Route for the selected card.
    pub fn selected_route(&self) -> Option<Route> {
        let listing = self.data.data()?;
        let product = listing.products.get(self.selected)?;
        Some(Route::Product { id: product.id })
    }
}
