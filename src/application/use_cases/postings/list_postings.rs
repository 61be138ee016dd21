use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::posting::Posting;

pub struct ListPostings<'a, R: PostingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostingRepository + ?Sized> ListPostings<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Posting>> {
        self.repo.list_all().await
    }
}
