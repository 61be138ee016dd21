use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::application::ports::posting_repository::PostingRepository;
use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::posting::Posting;
use crate::domain::jobs::write_result::{DeleteResult, InsertResult, UpsertResult};
use crate::infrastructure::db::PgPool;

pub struct SqlxPostingRepository {
    pub pool: PgPool,
}

impl SqlxPostingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_posting(r: PgRow) -> anyhow::Result<Posting> {
    let Json(body) = r.try_get::<Json<JsonObject>, _>("doc")?;
    Ok(Posting {
        id: r.get("id"),
        body,
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}

#[async_trait]
impl PostingRepository for SqlxPostingRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Posting>> {
        let rows = sqlx::query(
            r#"SELECT id, doc, created_at, updated_at FROM job_postings
               ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(map_posting).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Posting>> {
        let row = sqlx::query(
            r#"SELECT id, doc, created_at, updated_at FROM job_postings WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_posting).transpose()
    }

    async fn insert(&self, body: &JsonObject) -> anyhow::Result<InsertResult> {
        let inserted_id: Uuid =
            sqlx::query_scalar(r#"INSERT INTO job_postings (doc) VALUES ($1) RETURNING id"#)
                .bind(Json(body))
                .fetch_one(&self.pool)
                .await?;
        Ok(InsertResult { inserted_id })
    }

    async fn replace_or_insert(
        &self,
        id: Uuid,
        body: &JsonObject,
    ) -> anyhow::Result<UpsertResult> {
        // The WHERE on the conflict branch skips no-op rewrites, so no row
        // back means the document matched and was already identical.
        // `xmax = 0` tells a fresh insert apart from an update.
        let row = sqlx::query(
            r#"INSERT INTO job_postings (id, doc) VALUES ($1, $2)
               ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc, updated_at = now()
               WHERE job_postings.doc IS DISTINCT FROM EXCLUDED.doc
               RETURNING (xmax = 0) AS inserted"#,
        )
        .bind(id)
        .bind(Json(body))
        .fetch_optional(&self.pool)
        .await?;
        Ok(match row {
            Some(r) if r.get::<bool, _>("inserted") => UpsertResult::inserted(id),
            Some(_) => UpsertResult::replaced(true),
            None => UpsertResult::replaced(false),
        })
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected(),
        })
    }
}
