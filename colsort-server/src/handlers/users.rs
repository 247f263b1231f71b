//! Sortable user listing.

use axum::{
    Json,
    extract::{Query, RawQuery, State, rejection::QueryRejection},
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use colsort_core::resolve_and_store;
use serde::Deserialize;
use tracing::debug;

use crate::{
    api_types::{ApiResponse, HeaderResponse, UserListResponse},
    infra::{
        app_state::AppState,
        errors::{AppError, AppResult},
        session::SessionId,
    },
};

pub const DEFAULT_PER_PAGE: usize = 25;
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub async fn list_users(
    State(state): State<AppState>,
    session: SessionId,
    uri: Uri,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(AppError::bad_request(format!(
            "per_page must be between 1 and {MAX_PER_PAGE}"
        )));
    }
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::bad_request("page starts at 1"));
    }

    let params = &state.config.sort_params;
    let requested = params.extract(raw_query.as_deref().unwrap_or_default());
    let session_key = session.id().to_string();

    let directory = &state.users;
    let resolver = directory.resolver();
    let current = resolve_and_store(state.sort_store.as_ref(), resolver, &session_key, requested);

    debug!(
        target: "users.list",
        session = %session_key,
        sort = %current,
        "resolved user listing sort"
    );

    // Header links restart at page one.
    let base = uri.path();
    let headers = resolver
        .header_cells(&current)
        .into_iter()
        .map(|cell| HeaderResponse::from_cell(cell, base, params))
        .collect();

    let rows = directory.sorted(&current);
    let total = rows.len();
    let users = rows
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    let payload = UserListResponse {
        order_clause: resolver.order_clause(&current),
        sort: current,
        headers,
        total,
        page,
        per_page,
        users,
    };

    let mut response = Json(ApiResponse::success(payload)).into_response();
    if let Some(cookie) = session.set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}
