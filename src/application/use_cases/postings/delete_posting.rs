use uuid::Uuid;

use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::write_result::DeleteResult;

pub struct DeletePosting<'a, R: PostingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostingRepository + ?Sized> DeletePosting<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<DeleteResult> {
        self.repo.delete(id).await
    }
}
