use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::postings::create_posting::CreatePosting;
use crate::application::use_cases::postings::delete_posting::DeletePosting;
use crate::application::use_cases::postings::get_posting::GetPosting;
use crate::application::use_cases::postings::list_postings::ListPostings;
use crate::application::use_cases::postings::update_posting::UpdatePosting;
use crate::bootstrap::app_context::AppContext;
use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::write_result::{DeleteResult, InsertResult, UpsertResult};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl From<InsertResult> for InsertResponse {
    fn from(r: InsertResult) -> Self {
        InsertResponse {
            acknowledged: true,
            inserted_id: r.inserted_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Uuid>,
}

impl From<UpsertResult> for UpdateResponse {
    fn from(r: UpsertResult) -> Self {
        UpdateResponse {
            acknowledged: true,
            matched_count: r.matched_count,
            modified_count: r.modified_count,
            upserted_count: r.upserted_count(),
            upserted_id: r.upserted_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(r: DeleteResult) -> Self {
        DeleteResponse {
            acknowledged: true,
            deleted_count: r.deleted_count,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/:id", get(get_job))
        .route("/job/:id", put(update_job).delete(delete_job))
        .with_state(ctx)
}

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_argument(format!("invalid id: {raw}")))
}

#[utoipa::path(get, path = "/jobs", tag = "Jobs",
    responses((status = 200, body = [serde_json::Value])))]
pub async fn list_jobs(State(ctx): State<AppContext>) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let repo = ctx.posting_repo();
    let uc = ListPostings {
        repo: repo.as_ref(),
    };
    let postings = uc.execute().await?;
    Ok(Json(
        postings.into_iter().map(|p| p.into_document()).collect(),
    ))
}

#[utoipa::path(get, path = "/jobs/{id}", tag = "Jobs",
    params(("id" = String, Path, description = "Posting ID")),
    responses(
        (status = 200, body = serde_json::Value, description = "The posting, or null when unknown"),
        (status = 400, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_job(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Option<JsonValue>>, ApiError> {
    let id = parse_id(&id)?;
    let repo = ctx.posting_repo();
    let uc = GetPosting {
        repo: repo.as_ref(),
    };
    let posting = uc.execute(id).await?;
    Ok(Json(posting.map(|p| p.into_document())))
}

#[utoipa::path(post, path = "/jobs", tag = "Jobs", request_body = serde_json::Value,
    responses((status = 200, body = InsertResponse)))]
pub async fn create_job(
    State(ctx): State<AppContext>,
    Json(body): Json<JsonObject>,
) -> Result<Json<InsertResponse>, ApiError> {
    let repo = ctx.posting_repo();
    let uc = CreatePosting {
        repo: repo.as_ref(),
    };
    let result = uc.execute(body).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(put, path = "/job/{id}", tag = "Jobs", request_body = serde_json::Value,
    params(("id" = String, Path, description = "Posting ID")),
    responses(
        (status = 200, body = UpdateResponse, description = "Replaced, or created when the id was unknown"),
        (status = 400, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_job(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(body): Json<JsonObject>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let id = parse_id(&id)?;
    let repo = ctx.posting_repo();
    let uc = UpdatePosting {
        repo: repo.as_ref(),
    };
    let result = uc.execute(id, body).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(delete, path = "/job/{id}", tag = "Jobs",
    params(("id" = String, Path, description = "Posting ID")),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_job(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    let repo = ctx.posting_repo();
    let uc = DeletePosting {
        repo: repo.as_ref(),
    };
    let result = uc.execute(id).await?;
    Ok(Json(result.into()))
}
