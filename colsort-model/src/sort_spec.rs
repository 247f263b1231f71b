use std::fmt;

use crate::column::SortableColumn;
use crate::direction::SortDirection;

/// Active column and direction of a listing view.
///
/// Values produced by the resolver in `colsort-core` always name a configured
/// column. Values built by hand, or read back from session storage, are only
/// trusted after the resolver has checked them against the view's columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortSpec {
    pub column_key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column_key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_key: column_key.into(),
            direction,
        }
    }

    /// Initial state for a column: its key with its default direction.
    pub fn default_for(column: &SortableColumn) -> Self {
        Self::new(column.key.clone(), column.default_direction)
    }

    pub fn toggled(&self) -> Self {
        Self::new(self.column_key.clone(), self.direction.toggled())
    }

    pub fn is_on(&self, column: &SortableColumn) -> bool {
        self.column_key == column.key
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column_key, self.direction)
    }
}
