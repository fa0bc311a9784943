// State management module.
// Handles navigation history and per-view data for the listing and detail views.

pub mod detail;
pub mod listing;
pub mod loading;
pub mod navigation;

pub use detail::DetailState;
pub use listing::{Card, ListingState};
pub use loading::LoadingState;
pub use navigation::{BreadcrumbNode, NavigationStack};
