use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

/// A schemaless JSON object as stored in a collection.
pub type JsonObject = Map<String, JsonValue>;

/// Key under which a document's store-assigned identifier is rendered.
pub const ID_FIELD: &str = "_id";

/// Drops any client-supplied identifier; the store owns `_id`.
pub fn strip_id(mut body: JsonObject) -> JsonObject {
    body.remove(ID_FIELD);
    body
}

pub fn with_id(id: Uuid, mut body: JsonObject) -> JsonValue {
    body.insert(ID_FIELD.to_string(), JsonValue::String(id.to_string()));
    JsonValue::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_id_is_replaced_by_store_id() {
        let id = Uuid::new_v4();
        let body = json!({"_id": "spoofed", "title": "Rust dev"})
            .as_object()
            .cloned()
            .unwrap();
        let rendered = with_id(id, strip_id(body));
        assert_eq!(rendered["_id"], json!(id.to_string()));
        assert_eq!(rendered["title"], json!("Rust dev"));
    }
}
