// src/domain/changelog/entity.rs
use crate::domain::content_type::TypeDescriptor;
use crate::domain::errors::InvalidChoice;
use crate::domain::search::Searchable;
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Create => "create",
            ChangeAction::Update => "update",
            ChangeAction::Delete => "delete",
        }
    }
}

impl FromStr for ChangeAction {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(ChangeAction::Create),
            "update" => Ok(ChangeAction::Update),
            "delete" => Ok(ChangeAction::Delete),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account that performed a change, while that account still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRef {
    pub id: i64,
    pub username: String,
}

/// One recorded create/update/delete of a tracked object.
///
/// `changed_object_type` + `changed_object_id` point at the object as it was
/// when the change happened; the object may be gone since, so `object_repr`
/// is kept as the label to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub id: i64,
    pub time: DateTime<Utc>,
    pub user: Option<ActorRef>,
    pub user_name: String,
    pub request_id: Uuid,
    pub action: ChangeAction,
    pub changed_object_type: TypeDescriptor,
    pub changed_object_id: i64,
    pub object_repr: String,
}

impl ChangeRecord {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|actor| actor.id)
    }

    pub fn changed_object_type_id(&self) -> i64 {
        self.changed_object_type.id
    }
}

impl Searchable for ChangeRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.user_name.as_str()), Some(self.object_repr.as_str())]
    }
}
