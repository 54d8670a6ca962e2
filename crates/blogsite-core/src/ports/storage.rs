use async_trait::async_trait;

/// Storage for uploaded banner images.
#[async_trait]
pub trait BannerStore: Send + Sync {
    /// Persist an uploaded file and return the URL it is served from.
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, StorageError>;

    /// Delete a banner previously returned by [`BannerStore::store`].
    ///
    /// URLs this store did not issue, and files already gone, are ignored.
    async fn remove(&self, url: &str) -> Result<(), StorageError>;
}

/// Banner storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("I/O failed: {0}")]
    Io(String),
}
