//! Query-string side of sortable headers.
//!
//! Only the column key travels in links. The direction of the next request is
//! derived by the resolver from persisted state, so a crafted direction in the
//! URL has nothing to attach to.

use colsort_model::SortSpec;
use url::form_urlencoded;

pub const DEFAULT_SORT_PARAM: &str = "sort";

/// Name of the query parameter carrying the requested column key.
///
/// Views that share a page use distinct names so their headers do not
/// interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParams {
    name: String,
}

impl Default for SortParams {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_PARAM)
    }
}

impl SortParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested column key from a raw query string, with or without a
    /// leading `?`. The first non-blank value wins.
    pub fn extract(&self, query: &str) -> Option<String> {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, value)| key == self.name.as_str() && !value.trim().is_empty())
            .map(|(_, value)| value.into_owned())
    }

    /// Encoded `name=key` pair for `spec`.
    pub fn encode(&self, spec: &SortSpec) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.name, &spec.column_key)
            .finish()
    }

    pub fn href(&self, base: &str, spec: &SortSpec) -> String {
        let separator = match base.rfind('?') {
            Some(idx) if idx + 1 == base.len() => "",
            Some(_) => "&",
            None => "?",
        };
        format!("{base}{separator}{}", self.encode(spec))
    }
}
