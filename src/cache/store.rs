// Image store for cached product images.
// A write-once key-value mirror with no eviction, expiry, or size bound.

#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Result, ShopfrontError};

/// Persistent key-value storage for encoded images.
///
/// Entries are never evicted or expired. Implementations must tolerate
/// concurrent calls for distinct keys.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Look up a cached value.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Number of stored entries.
    async fn len(&self) -> Result<usize>;
}

/// Store backed by one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileImageStore {
    dir: PathBuf,
}

impl FileImageStore {
    /// Open a store rooted at `dir`, creating it if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ShopfrontError::Store {
                key: key.to_string(),
                message: "invalid key".to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        read_text(&self.entry_path(key)?).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        write_text(&self.entry_path(key)?, value).await
    }

    async fn len(&self) -> Result<usize> {
        let mut count = 0;
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let is_temp = entry.path().extension().is_some_and(|ext| ext == "tmp");
            if entry.file_type().await?.is_file() && !is_temp {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// In-process store; contents live as long as the value.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    entries: RwLock<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(key: &str) -> ShopfrontError {
        ShopfrontError::Store {
            key: key.to_string(),
            message: "lock poisoned".to_string(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let entries = self.entries.read().map_err(|_| Self::poisoned(""))?;
        Ok(entries.len())
    }
}

/// Write text atomically via a temp file.
async fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(text.as_bytes()).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(&temp_path, path).await?;

    Ok(())
}

async fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
