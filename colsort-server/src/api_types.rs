use colsort_core::{HeaderCell, SortDirection, SortParams, SortSpec};
use serde::Serialize;

use crate::users::UserRow;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            error: None,
        }
    }
}

/// One table header as sent to clients.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderResponse {
    pub key: String,
    pub label: String,
    pub href: String,
    pub active: bool,
    pub css_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<&'static str>,
    pub link: SortSpec,
}

impl HeaderResponse {
    pub fn from_cell(cell: HeaderCell, base: &str, params: &SortParams) -> Self {
        Self {
            href: cell.href(base, params),
            css_class: cell.css_class(),
            indicator: cell.indicator(),
            key: cell.key,
            label: cell.label,
            active: cell.active,
            direction: cell.direction,
            link: cell.link,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub sort: SortSpec,
    pub order_clause: String,
    pub headers: Vec<HeaderResponse>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub users: Vec<UserRow>,
}
