use thiserror::Error;

/// Errors produced by model parsing routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid sort direction: {0:?}")]
    InvalidDirection(String),
}
