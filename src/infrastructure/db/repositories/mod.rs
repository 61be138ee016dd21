pub mod job_application_repository_sqlx;
pub mod posting_repository_sqlx;
pub mod store_health_sqlx;
