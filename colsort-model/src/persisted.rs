use crate::direction::SortDirection;
use crate::sort_spec::SortSpec;

/// Storage shape of a [`SortSpec`]: two plain string fields.
///
/// Session backends keep whatever they were given, so reading a value back
/// is lossy on purpose: anything that does not decode is treated as if no
/// state had been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedSort {
    pub column: String,
    pub direction: String,
}

impl PersistedSort {
    pub fn to_spec(&self) -> Option<SortSpec> {
        // Keys match exactly, so a padded column is not the column it resembles.
        if self.column.is_empty() || self.column.trim() != self.column {
            return None;
        }
        let direction = self.direction.parse::<SortDirection>().ok()?;
        Some(SortSpec::new(self.column.clone(), direction))
    }
}

impl From<&SortSpec> for PersistedSort {
    fn from(spec: &SortSpec) -> Self {
        Self {
            column: spec.column_key.clone(),
            direction: spec.direction.as_str().to_string(),
        }
    }
}
