use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::Row;
use sqlx::types::Json;
use uuid::Uuid;

use crate::application::ports::job_application_repository::{
    InsertOutcome, JobApplicationRepository,
};
use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::job_application::{JobApplication, NewJobApplication, POSTING_REF_FIELD};
use crate::domain::jobs::write_result::InsertResult;
use crate::infrastructure::db::PgPool;

pub struct SqlxJobApplicationRepository {
    pub pool: PgPool,
}

impl SqlxJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobApplicationRepository for SqlxJobApplicationRepository {
    async fn exists_for(&self, email: &str, jo_id: &JsonValue) -> anyhow::Result<bool> {
        let found: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(
                 SELECT 1 FROM job_applications
                 WHERE doc->>'email' = $1 AND doc->'joId' = $2
               )"#,
        )
        .bind(email)
        .bind(Json(jo_id))
        .fetch_one(&self.pool)
        .await?;
        Ok(found)
    }

    async fn insert(&self, app: &NewJobApplication) -> anyhow::Result<InsertOutcome> {
        let res = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO job_applications (doc) VALUES ($1) RETURNING id"#,
        )
        .bind(Json(&app.body))
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(inserted_id) => Ok(InsertOutcome::Inserted(InsertResult { inserted_id })),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(InsertOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_by_email(&self, email: &str) -> anyhow::Result<Vec<JobApplication>> {
        let rows = sqlx::query(
            r#"SELECT id, doc, doc->>'email' AS email, created_at
               FROM job_applications
               WHERE doc->>'email' = $1
               ORDER BY created_at ASC, id ASC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for r in rows {
            let Json(body) = r.try_get::<Json<JsonObject>, _>("doc")?;
            out.push(JobApplication {
                id: r.get("id"),
                email: r.get("email"),
                jo_id: body
                    .get(POSTING_REF_FIELD)
                    .cloned()
                    .unwrap_or(JsonValue::Null),
                body,
                created_at: r.get("created_at"),
            });
        }
        Ok(out)
    }
}
