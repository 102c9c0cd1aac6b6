// src/presentation/http/controllers/content_types.rs
use crate::application::{
    dto::{ContentTypeDto, ListResponse},
    error::ApplicationResult,
    queries::content_types::{GetContentTypeQuery, ListContentTypesQuery},
};
use crate::domain::content_type::TypeFilter;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, RawQuery},
};

pub fn type_filter(params: &QueryParams) -> ApplicationResult<TypeFilter> {
    Ok(TypeFilter {
        ids: params.parsed("id")?,
        app_labels: params.stripped_strings("app_label"),
        models: params.stripped_strings("model"),
        q: params.last("q").map(str::to_string),
    })
}

#[utoipa::path(
    get,
    path = "/api/extras/content-types",
    params(
        ("id" = Option<Vec<i64>>, Query, description = "Content type id; repeatable"),
        ("app_label" = Option<Vec<String>>, Query, description = "Application label; repeatable"),
        ("model" = Option<Vec<String>>, Query, description = "Model name; repeatable"),
        ("q" = Option<String>, Query, description = "Case-insensitive search over app_label and model")
    ),
    responses(
        (status = 200, description = "Matching content types.", body = crate::presentation::http::openapi::ContentTypeListResponse),
        (status = 400, description = "Invalid filter value.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Extras"
)]
pub async fn list_content_types(
    Extension(state): Extension<HttpState>,
    RawQuery(raw): RawQuery,
) -> HttpResult<Json<ListResponse<ContentTypeDto>>> {
    let params = QueryParams::parse(raw.as_deref()).into_http()?;
    let filter = type_filter(&params).into_http()?;

    state
        .services
        .content_type_queries
        .list_content_types(ListContentTypesQuery { filter })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/extras/content-types/{id}",
    params(("id" = i64, Path, description = "Content type id")),
    responses(
        (status = 200, description = "The content type.", body = crate::application::dto::ContentTypeDto),
        (status = 404, description = "No such content type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Extras"
)]
pub async fn get_content_type(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentTypeDto>> {
    state
        .services
        .content_type_queries
        .get_content_type(GetContentTypeQuery { id })
        .await
        .into_http()
        .map(Json)
}
