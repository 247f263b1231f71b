//! Validated column configuration for a single listing view.

use std::collections::HashSet;

use colsort_model::{SortSpec, SortableColumn};

use crate::error::{ConfigError, Result};

/// Ordered, non-empty whitelist of sortable columns.
///
/// Built once per view. There is no way to add a column after construction,
/// so request data can never widen the set of accepted keys.
#[derive(Debug, Clone)]
pub struct SortColumns {
    columns: Vec<SortableColumn>,
}

impl SortColumns {
    pub fn new<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = SortableColumn>,
    {
        let columns: Vec<SortableColumn> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(ConfigError::EmptyColumns);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(ConfigError::BlankKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateKey(column.key.clone()));
            }
        }

        Ok(Self { columns })
    }

    pub fn get(&self, key: &str) -> Option<&SortableColumn> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The fallback column, first in configuration order.
    pub fn first(&self) -> &SortableColumn {
        // Non-empty by construction.
        &self.columns[0]
    }

    /// Initial state of the view before any input has been seen.
    pub fn initial_spec(&self) -> SortSpec {
        SortSpec::default_for(self.first())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortableColumn> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a SortColumns {
    type Item = &'a SortableColumn;
    type IntoIter = std::slice::Iter<'a, SortableColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
