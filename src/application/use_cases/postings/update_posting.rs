use uuid::Uuid;

use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::document::{JsonObject, strip_id};
use crate::domain::jobs::write_result::UpsertResult;

pub struct UpdatePosting<'a, R: PostingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostingRepository + ?Sized> UpdatePosting<'a, R> {
    /// Replaces the whole posting. An unknown id is not an error: the
    /// document is created under that id instead.
    pub async fn execute(&self, id: Uuid, body: JsonObject) -> anyhow::Result<UpsertResult> {
        let result = self.repo.replace_or_insert(id, &strip_id(body)).await?;
        if result.upserted_id.is_some() {
            tracing::info!(posting_id = %id, "posting_upserted_on_missing_id");
        }
        Ok(result)
    }
}
