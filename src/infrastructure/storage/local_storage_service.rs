use super::traits::StorageService;
use anyhow::bail;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Local filesystem storage for uploaded images.
///
/// Files are written verbatim into a single flat content directory and served
/// back under `public_prefix` (e.g. `/uploads`). The directory is created on
/// first use; `create_dir_all` is idempotent, so concurrent saves are safe.
/// Stored files are never mutated or deleted by the service.
#[derive(Clone)]
pub struct LocalStorageService {
    uploads_dir: PathBuf,
    public_prefix: String,
}

impl LocalStorageService {
    /// # Arguments
    /// * `uploads_dir` - Content directory for stored files (e.g. "./uploads")
    /// * `public_prefix` - URL prefix files are served under (e.g. "/uploads")
    pub fn new(uploads_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Reject filenames that could escape the content directory. Generated
    /// names are a UUID plus extension, so anything else indicates a bug or
    /// tampering upstream.
    fn validate_filename(filename: &str) -> anyhow::Result<()> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            bail!("invalid storage filename: {filename:?}");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn save(&self, filename: &str, data: &[u8]) -> anyhow::Result<String> {
        Self::validate_filename(filename)?;

        fs::create_dir_all(&self.uploads_dir).await?;

        let path = self.uploads_dir.join(filename);
        fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "stored uploaded file");

        Ok(self.public_url(filename))
    }

    fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), filename)
    }
}
