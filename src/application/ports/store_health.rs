use async_trait::async_trait;

#[async_trait]
pub trait StoreHealthPort: Send + Sync {
    async fn ping(&self) -> anyhow::Result<()>;
}
