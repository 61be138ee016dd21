pub mod create_posting;
pub mod delete_posting;
pub mod get_posting;
pub mod list_postings;
pub mod update_posting;
