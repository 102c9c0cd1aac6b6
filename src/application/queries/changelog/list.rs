use super::{ChangeLogQueryService, actors};
use crate::{
    application::{
        dto::{ChangeRecordDto, ListResponse},
        error::{ApplicationError, ApplicationResult},
    },
    domain::changelog::ChangeFilter,
};

pub struct ListChangesQuery {
    pub filter: ChangeFilter,
}

pub struct GetChangeQuery {
    pub id: i64,
}

impl ChangeLogQueryService {
    pub async fn list_changes(
        &self,
        query: ListChangesQuery,
    ) -> ApplicationResult<ListResponse<ChangeRecordDto>> {
        let ListChangesQuery { filter } = query;
        actors::ensure_known_actors(self.accounts.as_ref(), &filter).await?;

        tracing::debug!(?filter, unfiltered = filter.is_empty(), "listing change records");
        let records = self.repo.list(&filter).await?;
        tracing::debug!(count = records.len(), "change records matched");

        Ok(records.into_iter().map(ChangeRecordDto::from).collect())
    }

    pub async fn get_change(&self, query: GetChangeQuery) -> ApplicationResult<ChangeRecordDto> {
        self.repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("object change not found"))
    }
}
