// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{
        changelog::ChangeLogQueryService, content_types::ContentTypeQueryService,
    },
    domain::{
        changelog::ChangeRecordRepository, content_type::ContentTypeRepository,
        user::AccountDirectory,
    },
};

pub struct ApplicationServices {
    pub change_queries: Arc<ChangeLogQueryService>,
    pub content_type_queries: Arc<ContentTypeQueryService>,
}

impl ApplicationServices {
    pub fn new(
        change_repo: Arc<dyn ChangeRecordRepository>,
        content_type_repo: Arc<dyn ContentTypeRepository>,
        accounts: Arc<dyn AccountDirectory>,
    ) -> Self {
        let change_queries = Arc::new(ChangeLogQueryService::new(
            Arc::clone(&change_repo),
            Arc::clone(&accounts),
        ));
        let content_type_queries =
            Arc::new(ContentTypeQueryService::new(Arc::clone(&content_type_repo)));

        Self {
            change_queries,
            content_type_queries,
        }
    }
}
