use serde_json::Value as JsonValue;
use uuid::Uuid;

use super::document::{JsonObject, strip_id, with_id};

pub const EMAIL_FIELD: &str = "email";
pub const POSTING_REF_FIELD: &str = "joId";

#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: Uuid,
    pub email: String,
    pub jo_id: JsonValue,
    pub body: JsonObject,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl JobApplication {
    pub fn into_document(self) -> JsonValue {
        with_id(self.id, self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationShapeError {
    #[error("application is missing a `{0}` field")]
    MissingField(&'static str),
}

/// An application document before the store assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobApplication {
    pub email: String,
    pub jo_id: JsonValue,
    pub body: JsonObject,
}

impl NewJobApplication {
    /// Extracts the (email, joId) pair that the no-duplicate rule is keyed on.
    /// The document itself is stored as sent. `joId` may be a string or a
    /// number and keeps its JSON type, so `42` and `"42"` are different
    /// postings.
    pub fn from_document(body: JsonObject) -> Result<Self, ApplicationShapeError> {
        let body = strip_id(body);
        let email = match body.get(EMAIL_FIELD) {
            Some(JsonValue::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => return Err(ApplicationShapeError::MissingField(EMAIL_FIELD)),
        };
        let jo_id = match body.get(POSTING_REF_FIELD) {
            Some(v @ JsonValue::String(s)) if !s.trim().is_empty() => v.clone(),
            Some(v @ JsonValue::Number(_)) => v.clone(),
            _ => return Err(ApplicationShapeError::MissingField(POSTING_REF_FIELD)),
        };
        Ok(Self { email, jo_id, body })
    }
}
