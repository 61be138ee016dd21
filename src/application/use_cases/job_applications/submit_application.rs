use crate::application::ports::job_application_repository::{
    InsertOutcome, JobApplicationRepository,
};
use crate::domain::jobs::job_application::NewJobApplication;
use crate::domain::jobs::write_result::InsertResult;

#[derive(thiserror::Error, Debug)]
pub enum SubmitApplicationError {
    #[error("You have already added job")]
    Duplicate,
    #[error("failed to store application")]
    Store(#[source] anyhow::Error),
}

pub struct SubmitApplication<'a, R: JobApplicationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: JobApplicationRepository + ?Sized> SubmitApplication<'a, R> {
    /// One application per (email, joId). The existence check runs first; the
    /// store's unique index catches submissions that race past it.
    pub async fn execute(
        &self,
        app: &NewJobApplication,
    ) -> Result<InsertResult, SubmitApplicationError> {
        let exists = self
            .repo
            .exists_for(&app.email, &app.jo_id)
            .await
            .map_err(SubmitApplicationError::Store)?;
        if exists {
            tracing::debug!(email = %app.email, jo_id = %app.jo_id, "duplicate_application_rejected");
            return Err(SubmitApplicationError::Duplicate);
        }

        match self
            .repo
            .insert(app)
            .await
            .map_err(SubmitApplicationError::Store)?
        {
            InsertOutcome::Inserted(result) => {
                tracing::debug!(application_id = %result.inserted_id, jo_id = %app.jo_id, "application_submitted");
                Ok(result)
            }
            InsertOutcome::Conflict => {
                tracing::warn!(email = %app.email, jo_id = %app.jo_id, "duplicate_application_caught_by_store");
                Err(SubmitApplicationError::Duplicate)
            }
        }
    }
}
