//! In-memory ports for unit and router tests.
//!
//! They mirror the Postgres repositories closely enough for the HTTP layer:
//! insertion order is kept, ids are fresh v4 UUIDs and the (email, joId)
//! uniqueness is enforced on insert the way the unique index does.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::application::ports::job_application_repository::{
    InsertOutcome, JobApplicationRepository,
};
use crate::application::ports::posting_repository::PostingRepository;
use crate::application::ports::store_health::StoreHealthPort;
use crate::application::services::session::SessionTokens;
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::job_application::{JobApplication, NewJobApplication};
use crate::domain::jobs::posting::Posting;
use crate::domain::jobs::write_result::{DeleteResult, InsertResult, UpsertResult};

#[derive(Default)]
pub struct MemoryPostingRepository {
    rows: Mutex<Vec<Posting>>,
}

#[async_trait]
impl PostingRepository for MemoryPostingRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Posting>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Posting>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, body: &JsonObject) -> anyhow::Result<InsertResult> {
        let now = chrono::Utc::now();
        let inserted_id = Uuid::new_v4();
        self.rows.lock().unwrap().push(Posting {
            id: inserted_id,
            body: body.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(InsertResult { inserted_id })
    }

    async fn replace_or_insert(
        &self,
        id: Uuid,
        body: &JsonObject,
    ) -> anyhow::Result<UpsertResult> {
        let now = chrono::Utc::now();
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == id) {
            Some(existing) if existing.body == *body => Ok(UpsertResult::replaced(false)),
            Some(existing) => {
                existing.body = body.clone();
                existing.updated_at = now;
                Ok(UpsertResult::replaced(true))
            }
            None => {
                rows.push(Posting {
                    id,
                    body: body.clone(),
                    created_at: now,
                    updated_at: now,
                });
                Ok(UpsertResult::inserted(id))
            }
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<DeleteResult> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(DeleteResult {
            deleted_count: (before - rows.len()) as u64,
        })
    }
}

#[derive(Default)]
pub struct MemoryJobApplicationRepository {
    rows: Mutex<Vec<JobApplication>>,
    blind_check: bool,
}

impl MemoryJobApplicationRepository {
    /// `exists_for` always answers "no", as if a concurrent submission had
    /// not landed yet when the check ran.
    pub fn with_blind_check() -> Self {
        Self {
            rows: Mutex::default(),
            blind_check: true,
        }
    }
}

#[async_trait]
impl JobApplicationRepository for MemoryJobApplicationRepository {
    async fn exists_for(&self, email: &str, jo_id: &JsonValue) -> anyhow::Result<bool> {
        if self.blind_check {
            return Ok(false);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.email == email && &a.jo_id == jo_id))
    }

    async fn insert(&self, app: &NewJobApplication) -> anyhow::Result<InsertOutcome> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|a| a.email == app.email && a.jo_id == app.jo_id)
        {
            return Ok(InsertOutcome::Conflict);
        }
        let inserted_id = Uuid::new_v4();
        rows.push(JobApplication {
            id: inserted_id,
            email: app.email.clone(),
            jo_id: app.jo_id.clone(),
            body: app.body.clone(),
            created_at: chrono::Utc::now(),
        });
        Ok(InsertOutcome::Inserted(InsertResult { inserted_id }))
    }

    async fn list_by_email(&self, email: &str) -> anyhow::Result<Vec<JobApplication>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.email == email)
            .cloned()
            .collect())
    }
}

pub struct FailingStore;

#[async_trait]
impl PostingRepository for FailingStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Posting>> {
        anyhow::bail!("store unavailable")
    }

    async fn get_by_id(&self, _id: Uuid) -> anyhow::Result<Option<Posting>> {
        anyhow::bail!("store unavailable")
    }

    async fn insert(&self, _body: &JsonObject) -> anyhow::Result<InsertResult> {
        anyhow::bail!("store unavailable")
    }

    async fn replace_or_insert(
        &self,
        _id: Uuid,
        _body: &JsonObject,
    ) -> anyhow::Result<UpsertResult> {
        anyhow::bail!("store unavailable")
    }

    async fn delete(&self, _id: Uuid) -> anyhow::Result<DeleteResult> {
        anyhow::bail!("store unavailable")
    }
}

#[async_trait]
impl StoreHealthPort for FailingStore {
    async fn ping(&self) -> anyhow::Result<()> {
        anyhow::bail!("store unavailable")
    }
}

pub struct HealthyStore;

#[async_trait]
impl StoreHealthPort for HealthyStore {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub const TEST_SECRET: &str = "router-test-secret";

pub fn test_config(is_production: bool) -> Config {
    Config {
        api_port: 0,
        frontend_urls: vec!["http://localhost:5173".to_string()],
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expires_secs: 7 * 24 * 60 * 60,
        is_production,
    }
}

pub fn memory_context(cfg: Config) -> AppContext {
    let tokens = SessionTokens::new(&cfg.jwt_secret, cfg.jwt_expires_secs);
    let services = AppServices::new(
        Arc::new(MemoryPostingRepository::default()),
        Arc::new(MemoryJobApplicationRepository::default()),
        Arc::new(HealthyStore),
        tokens,
    );
    AppContext::new(cfg, services)
}
