// src/presentation/http/controllers/changelog.rs
use crate::application::{
    dto::{ChangeRecordDto, ListResponse},
    error::ApplicationResult,
    queries::changelog::{GetChangeQuery, ListChangesQuery},
};
use crate::domain::changelog::{ChangeFilter, ObjectTypeLookup};
use crate::domain::time_range::TimeRange;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, RawQuery},
};

/// Translate list-endpoint query parameters into change-record criteria.
pub fn change_filter(params: &QueryParams) -> ApplicationResult<ChangeFilter> {
    Ok(ChangeFilter {
        ids: params.parsed("id")?,
        users: params.strings("user"),
        user_ids: params.parsed("user_id")?,
        user_names: params.strings("user_name"),
        request_ids: params.parsed("request_id")?,
        actions: params.parsed("action")?,
        changed_object_type: params
            .stripped("changed_object_type")
            .last()
            .map(ObjectTypeLookup::parse),
        changed_object_type_ids: params.parsed("changed_object_type_id")?,
        changed_object_ids: params.parsed("changed_object_id")?,
        object_reprs: params.strings("object_repr"),
        time: TimeRange::new(
            params.datetime("time_after")?,
            params.datetime("time_before")?,
        ),
        q: params.last("q").map(str::to_string),
    })
}

#[utoipa::path(
    get,
    path = "/api/extras/object-changes",
    params(
        ("id" = Option<Vec<i64>>, Query, description = "Change record id; repeatable"),
        ("user" = Option<Vec<String>>, Query, description = "Username of the acting account; repeatable"),
        ("user_id" = Option<Vec<i64>>, Query, description = "Id of the acting account; repeatable"),
        ("user_name" = Option<Vec<String>>, Query, description = "Recorded actor name; repeatable"),
        ("request_id" = Option<Vec<String>>, Query, description = "Originating request UUID; repeatable"),
        ("action" = Option<Vec<String>>, Query, description = "create, update or delete; repeatable"),
        ("changed_object_type" = Option<String>, Query, description = "Changed object type as app_label.model"),
        ("changed_object_type_id" = Option<Vec<i64>>, Query, description = "Changed object type id; repeatable"),
        ("changed_object_id" = Option<Vec<i64>>, Query, description = "Changed object id; repeatable"),
        ("object_repr" = Option<Vec<String>>, Query, description = "Exact object label; repeatable"),
        ("time_after" = Option<String>, Query, description = "Earliest change time, inclusive"),
        ("time_before" = Option<String>, Query, description = "Latest change time, inclusive"),
        ("q" = Option<String>, Query, description = "Case-insensitive search over user_name and object_repr")
    ),
    responses(
        (status = 200, description = "Matching change records, newest first.", body = crate::presentation::http::openapi::ChangeRecordListResponse),
        (status = 400, description = "Invalid filter value.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Extras"
)]
pub async fn list_object_changes(
    Extension(state): Extension<HttpState>,
    RawQuery(raw): RawQuery,
) -> HttpResult<Json<ListResponse<ChangeRecordDto>>> {
    let params = QueryParams::parse(raw.as_deref()).into_http()?;
    let filter = change_filter(&params).into_http()?;

    state
        .services
        .change_queries
        .list_changes(ListChangesQuery { filter })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/extras/object-changes/{id}",
    params(("id" = i64, Path, description = "Change record id")),
    responses(
        (status = 200, description = "The change record.", body = crate::application::dto::ChangeRecordDto),
        (status = 404, description = "No such change record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Extras"
)]
pub async fn get_object_change(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ChangeRecordDto>> {
    state
        .services
        .change_queries
        .get_change(GetChangeQuery { id })
        .await
        .into_http()
        .map(Json)
}
