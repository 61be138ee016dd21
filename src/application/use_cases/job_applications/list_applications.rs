use crate::application::access::{self, AccessError};
use crate::application::ports::job_application_repository::JobApplicationRepository;
use crate::application::services::session::SessionIdentity;
use crate::domain::jobs::job_application::JobApplication;

#[derive(thiserror::Error, Debug)]
pub enum ListApplicationsError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("failed to load applications")]
    Store(#[source] anyhow::Error),
}

pub struct ListApplications<'a, R: JobApplicationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: JobApplicationRepository + ?Sized> ListApplications<'a, R> {
    pub async fn execute(
        &self,
        caller: &SessionIdentity,
        email: &str,
    ) -> Result<Vec<JobApplication>, ListApplicationsError> {
        if let Err(e) = access::require_owner(caller, email) {
            tracing::debug!(caller = %caller.email, requested = %email, "foreign_applications_denied");
            return Err(e.into());
        }
        self.repo
            .list_by_email(email)
            .await
            .map_err(ListApplicationsError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jobs::job_application::NewJobApplication;
    use crate::test_support::MemoryJobApplicationRepository;
    use serde_json::{Map, json};

    async fn seed(repo: &MemoryJobApplicationRepository, email: &str, jo_id: &str) {
        let body = json!({"email": email, "joId": jo_id});
        let app = NewJobApplication::from_document(body.as_object().cloned().unwrap()).unwrap();
        repo.insert(&app).await.unwrap();
    }

    fn caller(email: &str) -> SessionIdentity {
        SessionIdentity {
            email: email.to_string(),
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn returns_only_callers_applications() {
        let repo = MemoryJobApplicationRepository::default();
        seed(&repo, "a@x.com", "job-1").await;
        seed(&repo, "a@x.com", "job-2").await;
        seed(&repo, "b@x.com", "job-1").await;
        let uc = ListApplications { repo: &repo };

        let apps = uc.execute(&caller("a@x.com"), "a@x.com").await.unwrap();
        assert_eq!(apps.len(), 2);
        assert!(apps.iter().all(|a| a.email == "a@x.com"));
    }

    #[tokio::test]
    async fn other_users_applications_are_forbidden() {
        let repo = MemoryJobApplicationRepository::default();
        seed(&repo, "b@x.com", "job-1").await;
        let uc = ListApplications { repo: &repo };

        let err = uc.execute(&caller("a@x.com"), "b@x.com").await.unwrap_err();
        assert!(matches!(
            err,
            ListApplicationsError::Access(AccessError::Forbidden)
        ));
    }
}
