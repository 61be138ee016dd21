use serde_json::Value as JsonValue;
use uuid::Uuid;

use super::document::{JsonObject, with_id};

#[derive(Debug, Clone)]
pub struct Posting {
    pub id: Uuid,
    pub body: JsonObject,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Posting {
    pub fn into_document(self) -> JsonValue {
        with_id(self.id, self.body)
    }
}
