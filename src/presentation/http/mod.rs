use axum::Router;

use crate::bootstrap::app_context::AppContext;

pub mod auth;
pub mod error;
pub mod health;
pub mod job_applications;
pub mod jobs;


/// Every HTTP route, without the transport layers (CORS, tracing, docs)
/// that `main` wraps around it.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(auth::routes(ctx.clone()))
        .merge(jobs::routes(ctx.clone()))
        .merge(job_applications::routes(ctx))
}
