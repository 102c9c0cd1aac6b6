// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use statuspage_extras::domain::changelog::{ActorRef, ChangeAction, ChangeRecord};
use statuspage_extras::domain::content_type::TypeDescriptor;
use uuid::Uuid;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap()
}

pub fn component_type() -> TypeDescriptor {
    TypeDescriptor::new(11, "components", "component")
}

pub fn incident_type() -> TypeDescriptor {
    TypeDescriptor::new(12, "incidents", "incident")
}

pub fn content_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(1, "auth", "user"),
        component_type(),
        TypeDescriptor::new(13, "components", "componentgroup"),
        incident_type(),
        TypeDescriptor::new(14, "incidents", "incidentupdate"),
    ]
}

pub struct ChangeRecordBuilder {
    id: i64,
    time: DateTime<Utc>,
    actor: Option<ActorRef>,
    user_name: String,
    request_id: Uuid,
    action: ChangeAction,
    changed_object_type: TypeDescriptor,
    changed_object_id: i64,
    object_repr: String,
}

impl ChangeRecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            time: epoch() + Duration::minutes(id),
            actor: Some(ActorRef {
                id: 1,
                username: "admin".into(),
            }),
            user_name: "admin".into(),
            request_id: Uuid::from_u128(id as u128),
            action: ChangeAction::Update,
            changed_object_type: component_type(),
            changed_object_id: id,
            object_repr: format!("Object {id}"),
        }
    }

    pub fn repr(mut self, repr: impl Into<String>) -> Self {
        self.object_repr = repr.into();
        self
    }

    /// Sets both the live account and the recorded name.
    pub fn actor(mut self, id: i64, username: impl Into<String>) -> Self {
        let username = username.into();
        self.user_name = username.clone();
        self.actor = Some(ActorRef { id, username });
        self
    }

    /// The account that made the change has since been deleted.
    pub fn deleted_actor(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self.actor = None;
        self
    }

    pub fn action(mut self, action: ChangeAction) -> Self {
        self.action = action;
        self
    }

    pub fn object(mut self, object_type: TypeDescriptor, object_id: i64) -> Self {
        self.changed_object_type = object_type;
        self.changed_object_id = object_id;
        self
    }

    pub fn request(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn build(self) -> ChangeRecord {
        ChangeRecord {
            id: self.id,
            time: self.time,
            user: self.actor,
            user_name: self.user_name,
            request_id: self.request_id,
            action: self.action,
            changed_object_type: self.changed_object_type,
            changed_object_id: self.changed_object_id,
            object_repr: self.object_repr,
        }
    }
}

pub fn accounts() -> Vec<ActorRef> {
    vec![
        ActorRef {
            id: 1,
            username: "alice".into(),
        },
        ActorRef {
            id: 2,
            username: "bob".into(),
        },
    ]
}

/// Four changes across two requests, in time order 1..=4.
pub fn change_log() -> Vec<ChangeRecord> {
    let shared_request = Uuid::from_u128(0xfeed);
    vec![
        ChangeRecordBuilder::new(1)
            .repr("Router A")
            .actor(1, "alice")
            .action(ChangeAction::Create)
            .request(shared_request)
            .build(),
        ChangeRecordBuilder::new(2)
            .repr("Switch B")
            .actor(2, "bob")
            .request(shared_request)
            .build(),
        ChangeRecordBuilder::new(3)
            .repr("Database outage")
            .deleted_actor("carol")
            .object(incident_type(), 40)
            .build(),
        ChangeRecordBuilder::new(4)
            .repr("Router A")
            .actor(2, "bob")
            .action(ChangeAction::Delete)
            .build(),
    ]
}
