use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::jobs::job_application::{JobApplication, NewJobApplication};
use crate::domain::jobs::write_result::InsertResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(InsertResult),
    /// The store refused the row because the (email, joId) pair already exists.
    Conflict,
}

#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    /// `jo_id` compares by JSON value, so a number never matches a string.
    async fn exists_for(&self, email: &str, jo_id: &JsonValue) -> anyhow::Result<bool>;

    async fn insert(&self, app: &NewJobApplication) -> anyhow::Result<InsertOutcome>;

    async fn list_by_email(&self, email: &str) -> anyhow::Result<Vec<JobApplication>>;
}
