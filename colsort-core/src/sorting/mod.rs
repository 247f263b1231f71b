//! Sorting module for sortable listing headers
//!
//! This module provides:
//! - Validated per-view column configuration
//! - The request-driven sort-state resolver
//! - Header descriptors for renderers

pub mod columns;
pub mod header;
pub mod resolver;


pub use columns::*;
pub use header::*;
pub use resolver::*;
