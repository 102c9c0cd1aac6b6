// src/domain/user.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only view of the account table, used to validate actor criteria.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// The subset of `ids` that belong to existing accounts.
    async fn existing_ids(&self, ids: &[i64]) -> DomainResult<Vec<i64>>;

    /// The subset of `usernames` that belong to existing accounts.
    async fn existing_usernames(&self, usernames: &[String]) -> DomainResult<Vec<String>>;
}
