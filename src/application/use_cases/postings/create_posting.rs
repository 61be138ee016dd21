use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::document::{JsonObject, strip_id};
use crate::domain::jobs::write_result::InsertResult;

pub struct CreatePosting<'a, R: PostingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostingRepository + ?Sized> CreatePosting<'a, R> {
    pub async fn execute(&self, body: JsonObject) -> anyhow::Result<InsertResult> {
        let result = self.repo.insert(&strip_id(body)).await?;
        tracing::debug!(posting_id = %result.inserted_id, "posting_created");
        Ok(result)
    }
}
