// src/presentation/http/openapi.rs
use crate::application::dto::{ActorDto, ChangeRecordDto, ContentTypeDto};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeRecordListResponse {
    pub count: usize,
    pub items: Vec<ChangeRecordDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContentTypeListResponse {
    pub count: usize,
    pub items: Vec<ContentTypeDto>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::changelog::list_object_changes,
        crate::presentation::http::controllers::changelog::get_object_change,
        crate::presentation::http::controllers::content_types::list_content_types,
        crate::presentation::http::controllers::content_types::get_content_type,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ChangeRecordListResponse,
            ContentTypeListResponse,
            crate::presentation::http::error::ErrorResponse,
            ChangeRecordDto,
            ContentTypeDto,
            ActorDto
        )
    ),
    tags(
        (name = "Extras", description = "Change log and content type lookups"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Status Page Extras API",
        description = "Filtered listings of object changes and content types",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
