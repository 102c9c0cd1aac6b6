use super::ContentTypeQueryService;
use crate::{
    application::{
        dto::{ContentTypeDto, ListResponse},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content_type::TypeFilter,
};

pub struct ListContentTypesQuery {
    pub filter: TypeFilter,
}

pub struct GetContentTypeQuery {
    pub id: i64,
}

impl ContentTypeQueryService {
    pub async fn list_content_types(
        &self,
        query: ListContentTypesQuery,
    ) -> ApplicationResult<ListResponse<ContentTypeDto>> {
        tracing::debug!(
            filter = ?query.filter,
            unfiltered = query.filter.is_empty(),
            "listing content types"
        );
        let descriptors = self.repo.list(&query.filter).await?;
        Ok(descriptors.into_iter().map(ContentTypeDto::from).collect())
    }

    pub async fn get_content_type(
        &self,
        query: GetContentTypeQuery,
    ) -> ApplicationResult<ContentTypeDto> {
        self.repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("content type not found"))
    }
}
