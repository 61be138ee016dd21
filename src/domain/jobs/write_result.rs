use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    pub inserted_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertResult {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Uuid>,
}

impl UpsertResult {
    pub fn inserted(id: Uuid) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        }
    }

    pub fn replaced(changed: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(changed),
            upserted_id: None,
        }
    }

    pub fn upserted_count(&self) -> u64 {
        u64::from(self.upserted_id.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
