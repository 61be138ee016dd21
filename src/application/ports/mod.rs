pub mod job_application_repository;
pub mod posting_repository;
pub mod store_health;
