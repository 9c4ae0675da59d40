//! HTTP handlers. Every request reads the data sources afresh and hands the
//! user's timetable to the report layer.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use super::dto::UserListItem;
use super::error::HttpError;
use super::state::AppState;
use crate::core::report::{ReportKind, WeekdayReport};
use crate::data::{get_user_timetable, get_users};
use crate::errors::AppError;
use crate::models::User;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, HttpError>;

pub const FRONT_PAGE: &str = "/presence_weekday.html";
pub const NOT_FOUND_PAGE: &str = "notFound.html";

static PAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.html$").expect("page name pattern"));

/// GET /
pub async fn mainpage() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, FRONT_PAGE)])
}

/// GET /api/v1/users
///
/// Users for the dropdown, ordered by id.
pub async fn users_view(State(state): State<AppState>) -> HandlerResult<Vec<UserListItem>> {
    let path = state.config.data_xml_path();
    let users = tokio::task::spawn_blocking(move || get_users(&path)).await??;

    Ok(Json(
        users
            .into_values()
            .map(|u| UserListItem {
                user_id: u.id,
                name: u.name,
            })
            .collect(),
    ))
}

/// GET /api/v1/mean_time_weekday/{user_id}
pub async fn mean_time_weekday_view(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> HandlerResult<Value> {
    weekday_report(&state, user_id, ReportKind::MeanTime).await
}

/// GET /api/v1/presence_weekday/{user_id}
///
/// Total presence per weekday, with a header row for the chart.
pub async fn presence_weekday_view(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> HandlerResult<Value> {
    weekday_report(&state, user_id, ReportKind::Presence).await
}

/// GET /api/v1/presence_start_end/{user_id}
pub async fn presence_start_end_view(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> HandlerResult<Value> {
    weekday_report(&state, user_id, ReportKind::StartEnd).await
}

/// GET /api/v1/user_avatar/{user_id}
pub async fn user_avatar_view(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> HandlerResult<String> {
    let path = state.config.data_xml_path();
    let mut users = tokio::task::spawn_blocking(move || get_users(&path)).await??;

    let User { avatar, .. } = users
        .remove(&user_id)
        .ok_or(AppError::UserNotFound(user_id))?;

    Ok(Json(avatar))
}

/// GET /{page}
///
/// Pages come from the templates directory. Unknown pages get
/// `notFound.html` with a 404 status.
pub async fn render_page(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    let dir = state.config.templates_path();

    if PAGE_NAME.is_match(&page)
        && let Ok(body) = tokio::fs::read_to_string(dir.join(&page)).await
    {
        return Html(body).into_response();
    }

    debug!(page = %page, "template not found");

    match tokio::fs::read_to_string(dir.join(NOT_FOUND_PAGE)).await {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(_) => HttpError::NotFound(format!("page {page} not found")).into_response(),
    }
}

async fn weekday_report(state: &AppState, user_id: u32, kind: ReportKind) -> HandlerResult<Value> {
    let path = state.config.data_csv_path();
    let timetable = tokio::task::spawn_blocking(move || get_user_timetable(&path, user_id)).await??;

    Ok(Json(WeekdayReport::build(kind, &timetable).to_json()))
}
