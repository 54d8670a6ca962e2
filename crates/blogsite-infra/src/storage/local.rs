//! Local-disk banner storage. Files are served back by the API server under
//! the configured public path.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use blogsite_core::ports::{BannerStore, StorageError};

const ALLOWED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "avif"];

/// Where uploads go and how they are addressed.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub public_path: String,
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./uploads"),
            public_path: "/uploads".to_string(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Writes banners into a directory on the local filesystem.
pub struct LocalBannerStore {
    config: UploadConfig,
}

impl LocalBannerStore {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    fn url_prefix(&self) -> String {
        format!("{}/", self.config.public_path.trim_end_matches('/'))
    }
}

/// Reduce a client-supplied file name to a safe basename.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "banner".to_string()
    } else {
        cleaned.to_string()
    }
}

fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[async_trait]
impl BannerStore for LocalBannerStore {
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::Rejected("empty file".to_string()));
        }
        if bytes.len() > self.config.max_bytes {
            return Err(StorageError::Rejected(format!(
                "file exceeds {} bytes",
                self.config.max_bytes
            )));
        }

        let safe_name = sanitize_file_name(file_name);
        if !has_allowed_extension(&safe_name) {
            return Err(StorageError::Rejected(format!(
                "unsupported image type: {safe_name}"
            )));
        }

        // Millisecond prefix keeps upload order visible; the random part avoids collisions.
        let stored_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            &Uuid::new_v4().simple().to_string()[..8],
            safe_name
        );

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tokio::fs::write(self.config.dir.join(&stored_name), &bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::info!(file = %stored_name, size = bytes.len(), "Stored banner upload");

        Ok(format!("{}{}", self.url_prefix(), stored_name))
    }

    async fn remove(&self, url: &str) -> Result<(), StorageError> {
        let Some(stored_name) = url.strip_prefix(&self.url_prefix()) else {
            return Ok(());
        };
        // Only bare names this store could have written
        if stored_name.is_empty() || sanitize_file_name(stored_name) != stored_name {
            return Err(StorageError::Rejected(format!(
                "not a stored banner: {stored_name}"
            )));
        }

        match tokio::fs::remove_file(self.config.dir.join(stored_name)).await {
            Ok(()) => {
                tracing::info!(file = %stored_name, "Removed banner upload");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
