use std::sync::Arc;

use crate::domain::{changelog::ChangeRecordRepository, user::AccountDirectory};

pub struct ChangeLogQueryService {
    pub(super) repo: Arc<dyn ChangeRecordRepository>,
    pub(super) accounts: Arc<dyn AccountDirectory>,
}

impl ChangeLogQueryService {
    pub fn new(repo: Arc<dyn ChangeRecordRepository>, accounts: Arc<dyn AccountDirectory>) -> Self {
        Self { repo, accounts }
    }
}
