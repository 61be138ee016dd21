use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde_json::Value as JsonValue;

use crate::application::use_cases::job_applications::list_applications::ListApplications;
use crate::application::use_cases::job_applications::submit_application::SubmitApplication;
use crate::bootstrap::app_context::AppContext;
use crate::domain::jobs::document::JsonObject;
use crate::domain::jobs::job_application::NewJobApplication;
use crate::presentation::http::auth::SessionUser;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::jobs::InsertResponse;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/jobData", post(submit_application))
        .route("/jobData/:email", get(list_my_applications))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/jobData", tag = "Applications", request_body = serde_json::Value,
    responses(
        (status = 200, body = InsertResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody, description = "Already applied, or missing email/joId")
    ))]
pub async fn submit_application(
    State(ctx): State<AppContext>,
    Json(body): Json<JsonObject>,
) -> Result<Json<InsertResponse>, ApiError> {
    let app = NewJobApplication::from_document(body)
        .map_err(|e| ApiError::invalid_argument(e.to_string()))?;
    let repo = ctx.application_repo();
    let uc = SubmitApplication {
        repo: repo.as_ref(),
    };
    let result = uc.execute(&app).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(get, path = "/jobData/{email}", tag = "Applications",
    params(("email" = String, Path, description = "Applicant email; must match the session")),
    responses(
        (status = 200, body = [serde_json::Value]),
        (status = 401, body = crate::presentation::http::error::ErrorBody),
        (status = 403, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn list_my_applications(
    State(ctx): State<AppContext>,
    SessionUser(caller): SessionUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let repo = ctx.application_repo();
    let uc = ListApplications {
        repo: repo.as_ref(),
    };
    let apps = uc.execute(&caller, &email).await?;
    Ok(Json(apps.into_iter().map(|a| a.into_document()).collect()))
}
