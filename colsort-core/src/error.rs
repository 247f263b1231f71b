use thiserror::Error;

/// Problems with a view's column configuration.
///
/// These surface while a view is being set up, never while resolving a
/// request: request input that does not fit the configuration is discarded
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a sortable view needs at least one column")]
    EmptyColumns,

    #[error("sortable column key must not be blank")]
    BlankKey,

    #[error("duplicate sortable column key: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
