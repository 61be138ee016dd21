use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::posting::Posting;
use crate::domain::jobs::write_result::{DeleteResult, InsertResult, UpsertResult};

#[async_trait]
pub trait PostingRepository: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Posting>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Posting>>;

    async fn insert(&self, body: &JsonObject) -> anyhow::Result<InsertResult>;

    // Full replace; inserts under `id` when nothing matches.
    async fn replace_or_insert(&self, id: Uuid, body: &JsonObject)
    -> anyhow::Result<UpsertResult>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<DeleteResult>;
}
