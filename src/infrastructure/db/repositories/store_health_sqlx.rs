use async_trait::async_trait;

use crate::application::ports::store_health::StoreHealthPort;
use crate::infrastructure::db::PgPool;

pub struct SqlxStoreHealth {
    pub pool: PgPool,
}

impl SqlxStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealthPort for SqlxStoreHealth {
    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
