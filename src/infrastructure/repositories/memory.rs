// src/infrastructure/repositories/memory.rs
//! Repositories over fixed in-process collections, applying the same filter
//! semantics as the PostgreSQL implementations.
use crate::domain::changelog::{ActorRef, ChangeFilter, ChangeRecord, ChangeRecordRepository};
use crate::domain::content_type::{ContentTypeRepository, TypeDescriptor, TypeFilter};
use crate::domain::errors::DomainResult;
use crate::domain::user::AccountDirectory;
use async_trait::async_trait;
use std::cmp::Reverse;

#[derive(Debug, Clone, Default)]
pub struct InMemoryChangeRecordRepository {
    records: Vec<ChangeRecord>,
}

impl InMemoryChangeRecordRepository {
    pub fn new(mut records: Vec<ChangeRecord>) -> Self {
        records.sort_by_key(|record| Reverse((record.time, record.id)));
        Self { records }
    }
}

#[async_trait]
impl ChangeRecordRepository for InMemoryChangeRecordRepository {
    async fn list(&self, filter: &ChangeFilter) -> DomainResult<Vec<ChangeRecord>> {
        Ok(filter.apply(&self.records))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ChangeRecord>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentTypeRepository {
    descriptors: Vec<TypeDescriptor>,
}

impl InMemoryContentTypeRepository {
    pub fn new(mut descriptors: Vec<TypeDescriptor>) -> Self {
        descriptors.sort_by(|a, b| (&a.app_label, &a.model).cmp(&(&b.app_label, &b.model)));
        Self { descriptors }
    }
}

#[async_trait]
impl ContentTypeRepository for InMemoryContentTypeRepository {
    async fn list(&self, filter: &TypeFilter) -> DomainResult<Vec<TypeDescriptor>> {
        Ok(filter.apply(&self.descriptors))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TypeDescriptor>> {
        Ok(self.descriptors.iter().find(|d| d.id == id).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountDirectory {
    accounts: Vec<ActorRef>,
}

impl InMemoryAccountDirectory {
    pub fn new(accounts: Vec<ActorRef>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn existing_ids(&self, ids: &[i64]) -> DomainResult<Vec<i64>> {
        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.accounts.iter().any(|account| account.id == *id))
            .collect())
    }

    async fn existing_usernames(&self, usernames: &[String]) -> DomainResult<Vec<String>> {
        Ok(usernames
            .iter()
            .filter(|name| self.accounts.iter().any(|account| &account.username == *name))
            .cloned()
            .collect())
    }
}
