use anyhow::Result;
use statuspage_extras::application::services::ApplicationServices;
use statuspage_extras::config::AppConfig;
use statuspage_extras::domain::{
    changelog::ChangeRecordRepository, content_type::ContentTypeRepository,
    user::AccountDirectory,
};
use statuspage_extras::infrastructure::{
    database,
    repositories::{
        PostgresAccountDirectory, PostgresChangeRecordRepository, PostgresContentTypeRepository,
    },
};
use statuspage_extras::presentation::http::{
    middleware::RequestBudget,
    routes::{RouterSettings, build_router_with_settings},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server().runtime_threads())
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<()> {
    let server = config.server();
    let pool_size = u32::try_from(server.runtime_threads()).unwrap_or(u32::MAX);
    let pool = database::init_pool(config.database_url(), pool_size).await?;

    let change_repo: Arc<dyn ChangeRecordRepository> =
        Arc::new(PostgresChangeRecordRepository::new(pool.clone()));
    let content_type_repo: Arc<dyn ContentTypeRepository> =
        Arc::new(PostgresContentTypeRepository::new(pool.clone()));
    let accounts: Arc<dyn AccountDirectory> = Arc::new(PostgresAccountDirectory::new(pool));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&change_repo),
        Arc::clone(&content_type_repo),
        Arc::clone(&accounts),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let budget = RequestBudget::from_config(server);
    let app = build_router_with_settings(
        state,
        RouterSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            request_timeout: server.request_timeout,
            budget: budget.clone(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        workers = server.workers,
        threads = server.threads_per_worker,
        timeout_secs = server.request_timeout.map(|t| t.as_secs()),
        max_requests = budget.limit(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(budget))
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal(budget: RequestBudget) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("shutdown signal received"),
        _ = terminate => tracing::info!("shutdown signal received"),
        _ = budget.exhausted() => tracing::info!("request budget exhausted, shutting down"),
    }
}
