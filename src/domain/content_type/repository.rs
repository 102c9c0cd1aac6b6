use crate::domain::content_type::{TypeDescriptor, TypeFilter};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentTypeRepository: Send + Sync {
    /// Descriptors satisfying `filter`, ordered by `(app_label, model)`.
    async fn list(&self, filter: &TypeFilter) -> DomainResult<Vec<TypeDescriptor>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TypeDescriptor>>;
}
