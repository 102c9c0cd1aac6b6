use crate::domain::changelog::{ChangeFilter, ChangeRecord};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ChangeRecordRepository: Send + Sync {
    /// Records satisfying `filter`, newest first.
    async fn list(&self, filter: &ChangeFilter) -> DomainResult<Vec<ChangeRecord>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ChangeRecord>>;
}
