pub mod document;
pub mod job_application;
pub mod posting;
pub mod write_result;
