use crate::domain::content_type::TypeDescriptor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentTypeDto {
    pub id: i64,
    pub app_label: String,
    pub model: String,
}

impl From<TypeDescriptor> for ContentTypeDto {
    fn from(descriptor: TypeDescriptor) -> Self {
        Self {
            id: descriptor.id,
            app_label: descriptor.app_label,
            model: descriptor.model,
        }
    }
}
