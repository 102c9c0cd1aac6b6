// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{changelog, content_types},
    middleware::{RequestBudget, track_request_budget},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Limits applied around every route.
#[derive(Clone, Debug)]
pub struct RouterSettings {
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    pub request_timeout: Option<Duration>,
    pub budget: RequestBudget,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            request_timeout: None,
            budget: RequestBudget::unlimited(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_settings(state, RouterSettings::default())
}

pub fn build_router_with_settings(state: HttpState, settings: RouterSettings) -> Router {
    let RouterSettings {
        allowed_origins,
        request_timeout,
        budget,
    } = settings;

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/extras/object-changes",
            get(changelog::list_object_changes),
        )
        .route(
            "/api/extras/object-changes/{id}",
            get(changelog::get_object_change),
        )
        .route(
            "/api/extras/content-types",
            get(content_types::list_content_types),
        )
        .route(
            "/api/extras/content-types/{id}",
            get(content_types::get_content_type),
        );

    if let Some(timeout) = request_timeout {
        router = router.layer(timeout_layer(timeout));
    }

    router
        .layer(from_fn_with_state(budget, track_request_budget))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&allowed_origins))
        .layer(Extension(state))
}

/// Requests still running after `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
