//! # Colsort Core
//!
//! Sort-state resolution for sortable table headers on listing pages.
//!
//! ## Overview
//!
//! A listing view declares its sortable columns once. Each request then
//! brings an untrusted column key (from the query string) and the last sort
//! the session saw for that view. [`sorting::resolve`] turns those into a
//! trusted [`SortSpec`]:
//!
//! - **Whitelisting**: keys outside the configuration are discarded, never
//!   reported and never forwarded to a query layer
//! - **Toggling**: clicking the active column reverses its direction
//! - **Column switches**: a new column starts at its own default direction
//! - **Carry forward**: no input keeps the stored sort as it was
//!
//! Header links, the `ORDER BY` fragment and session storage are built on
//! top of the resolver in [`sorting::header`], [`SortResolver::order_clause`],
//! [`params`] and [`store`].
//!
//! ## Examples
//!
//! ```
//! use colsort_core::{
//!     MemorySortStore, SortColumns, SortParams, SortResolver, resolve_and_store,
//! };
//! use colsort_model::{SortDirection, SortableColumn};
//!
//! # fn main() -> Result<(), colsort_core::ConfigError> {
//! let columns = SortColumns::new([
//!     SortableColumn::new("login", "Login"),
//!     SortableColumn::new("created_on", "Created").descending(),
//! ])?;
//! let resolver = SortResolver::new("users", columns);
//! let store = MemorySortStore::new();
//! let params = SortParams::default();
//!
//! let first = resolve_and_store(&store, &resolver, "session-1", params.extract("sort=login"));
//! assert_eq!(first.direction, SortDirection::Ascending);
//!
//! let second = resolve_and_store(&store, &resolver, "session-1", params.extract("sort=login"));
//! assert_eq!(second.direction, SortDirection::Descending);
//! assert_eq!(resolver.order_clause(&second), "login DESC");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod error;
pub mod params;
pub mod sorting;
pub mod store;

pub use colsort_model::{PersistedSort, SortDirection, SortSpec, SortableColumn};
pub use error::{ConfigError, Result};
pub use params::{DEFAULT_SORT_PARAM, SortParams};
pub use sorting::{
    HeaderCell, RequestSortInput, SortColumns, SortResolver, is_active, link_target_for, resolve,
};
pub use store::{DEFAULT_STORE_CAPACITY, MemorySortStore, SortStateStore, resolve_and_store};
