use super::{map_sqlx, sql::Conditions};
use crate::domain::content_type::{ContentTypeRepository, TypeDescriptor, TypeFilter};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_CONTENT_TYPES: &str =
    "SELECT ct.id::bigint AS id, ct.app_label, ct.model FROM django_content_type ct";

#[derive(Clone)]
pub struct PostgresContentTypeRepository {
    pool: PgPool,
}

impl PostgresContentTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &TypeFilter) {
        let mut conditions = Conditions::new(builder);
        conditions.any_of("ct.id", filter.ids.clone());
        conditions.any_of("ct.app_label", filter.app_labels.clone());
        conditions.any_of("ct.model", filter.models.clone());
        if let Some(query) = filter.search_term() {
            conditions.contains_any(&["ct.app_label", "ct.model"], query);
        }
    }
}

#[derive(Debug, FromRow)]
struct ContentTypeRow {
    id: i64,
    app_label: String,
    model: String,
}

impl From<ContentTypeRow> for TypeDescriptor {
    fn from(row: ContentTypeRow) -> Self {
        TypeDescriptor::new(row.id, row.app_label, row.model)
    }
}

#[async_trait]
impl ContentTypeRepository for PostgresContentTypeRepository {
    async fn list(&self, filter: &TypeFilter) -> DomainResult<Vec<TypeDescriptor>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_CONTENT_TYPES);
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY ct.app_label, ct.model");

        let rows = builder
            .build_query_as::<ContentTypeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TypeDescriptor>> {
        let row = sqlx::query_as::<_, ContentTypeRow>(&format!(
            "{SELECT_CONTENT_TYPES} WHERE ct.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }
}
