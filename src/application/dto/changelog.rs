use crate::application::dto::ContentTypeDto;
use crate::domain::changelog::{ActorRef, ChangeRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActorDto {
    pub id: i64,
    pub username: String,
}

impl From<ActorRef> for ActorDto {
    fn from(actor: ActorRef) -> Self {
        Self {
            id: actor.id,
            username: actor.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChangeRecordDto {
    pub id: i64,
    pub time: DateTime<Utc>,
    /// `null` once the acting account has been deleted.
    pub user: Option<ActorDto>,
    pub user_name: String,
    pub request_id: Uuid,
    /// One of `create`, `update`, `delete`.
    pub action: String,
    pub changed_object_type: ContentTypeDto,
    pub changed_object_id: i64,
    pub object_repr: String,
}

impl From<ChangeRecord> for ChangeRecordDto {
    fn from(record: ChangeRecord) -> Self {
        Self {
            id: record.id,
            time: record.time,
            user: record.user.map(Into::into),
            user_name: record.user_name,
            request_id: record.request_id,
            action: record.action.as_str().to_string(),
            changed_object_type: record.changed_object_type.into(),
            changed_object_id: record.changed_object_id,
            object_repr: record.object_repr,
        }
    }
}
