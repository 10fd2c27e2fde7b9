use async_trait::async_trait;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Persist `data` under `filename` and return the public URL path the
    /// file will be served from.
    async fn save(&self, filename: &str, data: &[u8]) -> anyhow::Result<String>;

    fn public_url(&self, filename: &str) -> String;
}
