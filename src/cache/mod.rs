// Cache module for the local image mirror.
// Stores encoded product images so they survive restarts.

pub mod data_url;
pub mod paths;
pub mod store;

pub use paths::*;
pub use store::{FileImageStore, ImageStore};
#[cfg(test)]
pub use store::MemoryImageStore;
