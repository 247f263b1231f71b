use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Row order of a sorted listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn all() -> &'static [SortDirection] {
        &[SortDirection::Ascending, SortDirection::Descending]
    }

    /// The opposite direction, used when the active column is clicked again.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short form used in query strings and session storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    /// Glyph shown next to the label of the active header.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{25B2}",
            SortDirection::Descending => "\u{25BC}",
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        for dir in SortDirection::all() {
            assert_eq!(dir.toggled().toggled(), *dir);
        }
    }

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!(" DESC ".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert_eq!("Ascending".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!("descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = "sideways".parse::<SortDirection>().unwrap_err();
        assert_eq!(err, ModelError::InvalidDirection("sideways".to_string()));
    }

    #[test]
    fn display_matches_storage_form() {
        assert_eq!(SortDirection::Ascending.to_string(), "asc");
        assert_eq!(SortDirection::Descending.to_string(), "desc");
    }
}
