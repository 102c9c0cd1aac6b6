// src/domain/changelog/filter.rs
use crate::domain::changelog::{ChangeAction, ChangeRecord};
use crate::domain::content_type::ContentTypeKey;
use crate::domain::content_type::filter::one_of;
use crate::domain::search;
use crate::domain::time_range::TimeRange;
use uuid::Uuid;

/// `changed_object_type` criterion given as an `app_label.model` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectTypeLookup {
    Key(ContentTypeKey),
    /// The raw value did not look like `app_label.model`; nothing can match it.
    Malformed(String),
}

impl ObjectTypeLookup {
    pub fn parse(value: &str) -> Self {
        match ContentTypeKey::parse(value) {
            Some(key) => ObjectTypeLookup::Key(key),
            None => ObjectTypeLookup::Malformed(value.to_string()),
        }
    }
}

/// Criteria for listing change records.
///
/// Each set matches when the record's field equals any member; an empty set
/// is no constraint. All populated criteria must hold at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeFilter {
    pub ids: Vec<i64>,
    /// Usernames of the live acting account.
    pub users: Vec<String>,
    pub user_ids: Vec<i64>,
    /// Snapshot names stored on the record.
    pub user_names: Vec<String>,
    pub request_ids: Vec<Uuid>,
    pub actions: Vec<ChangeAction>,
    pub changed_object_type: Option<ObjectTypeLookup>,
    pub changed_object_type_ids: Vec<i64>,
    pub changed_object_ids: Vec<i64>,
    pub object_reprs: Vec<String>,
    pub time: TimeRange,
    pub q: Option<String>,
}

impl ChangeFilter {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
            && self.users.is_empty()
            && self.user_ids.is_empty()
            && self.user_names.is_empty()
            && self.request_ids.is_empty()
            && self.actions.is_empty()
            && self.changed_object_type.is_none()
            && self.changed_object_type_ids.is_empty()
            && self.changed_object_ids.is_empty()
            && self.object_reprs.is_empty()
            && self.time.is_unbounded()
            && self.search_term().is_none()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().and_then(search::needle)
    }

    pub fn matches(&self, record: &ChangeRecord) -> bool {
        one_of(&self.ids, &record.id)
            && self.matches_actor(record)
            && one_of(&self.user_names, &record.user_name)
            && one_of(&self.request_ids, &record.request_id)
            && one_of(&self.actions, &record.action)
            && self.matches_object_type(record)
            && one_of(&self.changed_object_ids, &record.changed_object_id)
            && one_of(&self.object_reprs, &record.object_repr)
            && self.time.contains(record.time)
            && search::matches_record(self.search_term(), record)
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<ChangeRecord>
    where
        I: IntoIterator<Item = &'a ChangeRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    fn matches_actor(&self, record: &ChangeRecord) -> bool {
        let by_name = self.users.is_empty()
            || record
                .user
                .as_ref()
                .is_some_and(|actor| self.users.contains(&actor.username));
        let by_id = self.user_ids.is_empty()
            || record
                .user_id()
                .is_some_and(|id| self.user_ids.contains(&id));
        by_name && by_id
    }

    fn matches_object_type(&self, record: &ChangeRecord) -> bool {
        let by_key = match &self.changed_object_type {
            None => true,
            Some(ObjectTypeLookup::Key(key)) => record.changed_object_type.has_key(key),
            Some(ObjectTypeLookup::Malformed(_)) => false,
        };
        by_key && one_of(&self.changed_object_type_ids, &record.changed_object_type_id())
    }
}
