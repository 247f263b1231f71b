//! # Colsort Server
//!
//! Listing service whose table headers are driven by `colsort-core`.
//!
//! Each request resolves the user listing's sort from the `sort` query
//! parameter and the state stored for the caller's session cookie, stores
//! the result, and returns rows, header links and the trusted order clause.

pub mod api_types;
pub mod handlers;
pub mod infra;
pub mod routes;
pub mod users;

pub use infra::app_state::AppState;
pub use routes::create_app;
