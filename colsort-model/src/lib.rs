//! Sort-state data model shared by the colsort crates.
#![allow(missing_docs)]

pub mod column;
pub mod direction;
pub mod error;
pub mod persisted;
pub mod sort_spec;

pub use column::SortableColumn;
pub use direction::SortDirection;
pub use error::ModelError;
pub use persisted::PersistedSort;
pub use sort_spec::SortSpec;
