use sqlx::{PgPool, postgres::PgPoolOptions};

/// The tables read here belong to the main status-page application, which also
/// owns their migrations.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
