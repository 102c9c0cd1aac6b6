use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::AccountDirectory;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresAccountDirectory {
    pool: PgPool,
}

impl PostgresAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountDirectory for PostgresAccountDirectory {
    async fn existing_ids(&self, ids: &[i64]) -> DomainResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT id::bigint FROM auth_user WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn existing_usernames(&self, usernames: &[String]) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT username FROM auth_user WHERE username = ANY($1)")
            .bind(usernames.to_vec())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
