use crate::direction::SortDirection;

/// A server-defined, sortable column of a listing view.
///
/// Columns are declared by the view that owns the listing page and are never
/// derived from request data. `key` is the whitelist entry that request
/// parameters are matched against; `order_expr` is what the query layer
/// receives once a key has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortableColumn {
    pub key: String,
    pub display_label: String,
    pub default_direction: SortDirection,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order_expr: Option<String>,
}

impl SortableColumn {
    /// Column sorted ascending on first activation.
    pub fn new(key: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_label: display_label.into(),
            default_direction: SortDirection::Ascending,
            order_expr: None,
        }
    }

    pub fn with_default_direction(mut self, direction: SortDirection) -> Self {
        self.default_direction = direction;
        self
    }

    /// Shorthand for columns that read best newest/largest first.
    pub fn descending(self) -> Self {
        self.with_default_direction(SortDirection::Descending)
    }

    pub fn with_order_expr(mut self, expr: impl Into<String>) -> Self {
        self.order_expr = Some(expr.into());
        self
    }

    /// Expression handed to the query layer; falls back to the key.
    pub fn order_expr(&self) -> &str {
        self.order_expr.as_deref().unwrap_or(&self.key)
    }
}
