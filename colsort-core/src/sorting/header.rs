use colsort_model::{SortDirection, SortSpec, SortableColumn};
use serde::Serialize;

use super::resolver::{is_active, link_target_for};
use crate::params::SortParams;

/// What a renderer needs to draw one sortable column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Spec the header link should request next.
    pub link: SortSpec,
    pub active: bool,
    /// Current direction, present only on the active column.
    pub direction: Option<SortDirection>,
}

impl HeaderCell {
    pub fn new(column: &SortableColumn, current: &SortSpec) -> Self {
        let active = is_active(column, current);
        Self {
            key: column.key.clone(),
            label: column.display_label.clone(),
            link: link_target_for(column, current),
            active,
            direction: active.then_some(current.direction),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.direction {
            Some(SortDirection::Ascending) => "sort asc",
            Some(SortDirection::Descending) => "sort desc",
            None => "sort",
        }
    }

    pub fn indicator(&self) -> Option<&'static str> {
        self.direction.as_ref().map(SortDirection::indicator)
    }

    /// Link for this header, `base` with the sort parameter appended.
    pub fn href(&self, base: &str, params: &SortParams) -> String {
        params.href(base, &self.link)
    }
}
