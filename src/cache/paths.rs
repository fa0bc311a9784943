// Cache path utilities.
// Constructs filesystem paths and store keys for cached images.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Platform directories for the application.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shopfront")
}

/// Get the base cache directory (~/.cache/shopfront on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding one file per cached image under a cache root.
pub fn images_dir(root: &Path) -> PathBuf {
    root.join("images")
}

/// Path to the log file under a cache root.
pub fn log_path(root: &Path) -> PathBuf {
    root.join("shopfront.log")
}

/// Store key for a product's primary image.
pub fn image_key(product_id: u64) -> String {
    format!("image_{}", product_id)
}
