//! Read-only access to one table of records.

use crate::store::types::{Record, StoreResult};
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Point lookup by primary key.
    async fn get(&self, key: &str) -> StoreResult<Option<R>>;

    /// Every record in the table, in the order the backend returns them.
    async fn scan(&self) -> StoreResult<Vec<R>>;
}
