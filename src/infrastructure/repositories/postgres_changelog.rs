// src/infrastructure/repositories/postgres_changelog.rs
use super::{map_sqlx, sql::Conditions};
use crate::domain::changelog::{
    ActorRef, ChangeAction, ChangeFilter, ChangeRecord, ChangeRecordRepository, ObjectTypeLookup,
};
use crate::domain::content_type::TypeDescriptor;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const SELECT_CHANGES: &str = "SELECT oc.id::bigint AS id, oc.time, oc.user_id::bigint AS user_id, \
     u.username AS username, oc.user_name, oc.request_id, oc.action, \
     ct.id::bigint AS content_type_id, ct.app_label, ct.model, \
     oc.changed_object_id::bigint AS changed_object_id, oc.object_repr \
     FROM extras_objectchange oc \
     JOIN django_content_type ct ON ct.id = oc.changed_object_type_id \
     LEFT JOIN auth_user u ON u.id = oc.user_id";

const SEARCH_COLUMNS: [&str; 2] = ["oc.user_name", "oc.object_repr"];

#[derive(Clone)]
pub struct PostgresChangeRecordRepository {
    pool: PgPool,
}

impl PostgresChangeRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &ChangeFilter) {
        let mut conditions = Conditions::new(builder);

        conditions.any_of("oc.id", filter.ids.clone());
        conditions.any_of("u.username", filter.users.clone());
        conditions.any_of("oc.user_id", filter.user_ids.clone());
        conditions.any_of("oc.user_name", filter.user_names.clone());
        conditions.any_of("oc.request_id", filter.request_ids.clone());
        conditions.any_of(
            "oc.action",
            filter
                .actions
                .iter()
                .map(|action| action.as_str().to_string())
                .collect(),
        );

        match &filter.changed_object_type {
            Some(ObjectTypeLookup::Key(key)) => {
                conditions.compare("ct.app_label", "=", key.app_label.clone());
                conditions.compare("ct.model", "=", key.model.clone());
            }
            Some(ObjectTypeLookup::Malformed(_)) => conditions.never(),
            None => {}
        }

        conditions.any_of(
            "oc.changed_object_type_id",
            filter.changed_object_type_ids.clone(),
        );
        conditions.any_of("oc.changed_object_id", filter.changed_object_ids.clone());
        conditions.any_of("oc.object_repr", filter.object_reprs.clone());

        if let Some(from) = filter.time.from {
            conditions.compare("oc.time", ">=", from);
        }
        if let Some(to) = filter.time.to {
            conditions.compare("oc.time", "<=", to);
        }

        if let Some(query) = filter.search_term() {
            conditions.contains_any(&SEARCH_COLUMNS, query);
        }
    }
}

#[derive(Debug, FromRow)]
struct ChangeRow {
    id: i64,
    time: DateTime<Utc>,
    user_id: Option<i64>,
    username: Option<String>,
    user_name: String,
    request_id: Uuid,
    action: String,
    content_type_id: i64,
    app_label: String,
    model: String,
    changed_object_id: i64,
    object_repr: String,
}

impl TryFrom<ChangeRow> for ChangeRecord {
    type Error = DomainError;

    fn try_from(row: ChangeRow) -> Result<Self, Self::Error> {
        let action = row.action.parse::<ChangeAction>().map_err(|_| {
            DomainError::Persistence(format!(
                "object change {} has unknown action {:?}",
                row.id, row.action
            ))
        })?;

        let user = match (row.user_id, row.username) {
            (Some(id), Some(username)) => Some(ActorRef { id, username }),
            _ => None,
        };

        Ok(ChangeRecord {
            id: row.id,
            time: row.time,
            user,
            user_name: row.user_name,
            request_id: row.request_id,
            action,
            changed_object_type: TypeDescriptor::new(row.content_type_id, row.app_label, row.model),
            changed_object_id: row.changed_object_id,
            object_repr: row.object_repr,
        })
    }
}

#[async_trait]
impl ChangeRecordRepository for PostgresChangeRecordRepository {
    async fn list(&self, filter: &ChangeFilter) -> DomainResult<Vec<ChangeRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_CHANGES);
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY oc.time DESC, oc.id DESC");

        let rows = builder
            .build_query_as::<ChangeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ChangeRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ChangeRecord>> {
        let row = sqlx::query_as::<_, ChangeRow>(&format!("{SELECT_CHANGES} WHERE oc.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ChangeRecord::try_from).transpose()
    }
}
