use uuid::Uuid;

use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::posting::Posting;

pub struct GetPosting<'a, R: PostingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostingRepository + ?Sized> GetPosting<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Posting>> {
        self.repo.get_by_id(id).await
    }
}
