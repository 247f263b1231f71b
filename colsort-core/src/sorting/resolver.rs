//! Request-driven sort-state resolution.
//!
//! The whole state machine of a sortable listing lives here. There is one
//! piece of state, the active [`SortSpec`], and two triggers:
//!
//! - a header click carrying a column key: toggles the direction when the
//!   key names the column that is already active, otherwise switches to the
//!   new column at its own default direction;
//! - no actionable input: carries the persisted spec forward, or starts from
//!   the first configured column.
//!
//! Unknown keys are dropped before they can reach a query layer. Nothing in
//! this module returns an error for request input.

use std::sync::Arc;

use colsort_model::{SortDirection, SortSpec, SortableColumn};
use tracing::{debug, trace};

use super::columns::SortColumns;
use super::header::HeaderCell;

const MAX_LOGGED_KEY_LEN: usize = 64;

/// Untrusted sort input gathered for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSortInput {
    /// Column key taken from the query string, as sent by the client.
    pub requested_column_key: Option<String>,
    /// Last state stored for this view in the caller's session storage.
    pub persisted_spec: Option<SortSpec>,
}

impl RequestSortInput {
    pub fn new(requested_column_key: Option<String>, persisted_spec: Option<SortSpec>) -> Self {
        Self {
            requested_column_key,
            persisted_spec,
        }
    }
}

/// Resolve the active sort for a request.
///
/// Precedence: a configured requested key, then a configured persisted
/// column, then the first configured column.
pub fn resolve(
    requested_column_key: Option<&str>,
    persisted_spec: Option<&SortSpec>,
    columns: &SortColumns,
) -> SortSpec {
    let persisted = match persisted_spec {
        Some(spec) if columns.contains(&spec.column_key) => Some(spec),
        Some(spec) => {
            trace!(
                target: "colsort::resolve",
                column = %truncate(&spec.column_key),
                "persisted sort no longer configured, using defaults"
            );
            None
        }
        None => None,
    };

    if let Some(key) = requested_column_key {
        match columns.get(key) {
            Some(column) => {
                return match persisted {
                    Some(previous) if previous.is_on(column) => previous.toggled(),
                    _ => SortSpec::default_for(column),
                };
            }
            None => {
                debug!(
                    target: "colsort::resolve",
                    key = %truncate(key),
                    "ignoring unknown sort column"
                );
            }
        }
    }

    match persisted {
        Some(previous) => previous.clone(),
        None => columns.initial_spec(),
    }
}

/// Spec that a click on `column`'s header should produce next.
pub fn link_target_for(column: &SortableColumn, current: &SortSpec) -> SortSpec {
    if current.is_on(column) {
        current.toggled()
    } else {
        SortSpec::default_for(column)
    }
}

pub fn is_active(column: &SortableColumn, current: &SortSpec) -> bool {
    current.is_on(column)
}

fn truncate(key: &str) -> &str {
    match key.char_indices().nth(MAX_LOGGED_KEY_LEN) {
        Some((idx, _)) => &key[..idx],
        None => key,
    }
}

/// Sort resolution bound to one named view.
///
/// Cheap to clone; the column configuration is shared.
#[derive(Debug, Clone)]
pub struct SortResolver {
    view: Arc<str>,
    columns: Arc<SortColumns>,
}

impl SortResolver {
    pub fn new(view: impl Into<Arc<str>>, columns: SortColumns) -> Self {
        Self {
            view: view.into(),
            columns: Arc::new(columns),
        }
    }

    /// Name of the view, used as the session storage slot.
    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn columns(&self) -> &SortColumns {
        &self.columns
    }

    pub fn resolve(&self, input: &RequestSortInput) -> SortSpec {
        resolve(
            input.requested_column_key.as_deref(),
            input.persisted_spec.as_ref(),
            &self.columns,
        )
    }

    /// Header descriptors in configuration order.
    pub fn header_cells(&self, current: &SortSpec) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell::new(column, current))
            .collect()
    }

    /// Trusted `ORDER BY` fragment for `spec`.
    ///
    /// The expression always comes from configuration. Each comma-separated
    /// part gets the direction, so multi-column expressions reverse as a
    /// whole. A spec naming an unconfigured column orders by the first
    /// column's default instead.
    pub fn order_clause(&self, spec: &SortSpec) -> String {
        match self.columns.get(&spec.column_key) {
            Some(column) => directed(column.order_expr(), spec.direction),
            None => {
                let fallback = self.columns.first();
                directed(fallback.order_expr(), fallback.default_direction)
            }
        }
    }
}

fn directed(expr: &str, direction: SortDirection) -> String {
    expr.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{part} {}", direction.sql_keyword()))
        .collect::<Vec<_>>()
        .join(", ")
}
