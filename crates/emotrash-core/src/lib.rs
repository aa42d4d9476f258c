//! Emotrash Core - validation and dynamic query construction
//!
//! This crate provides the storage-agnostic heart of the emotion record
//! service:
//! - The `EmotionRecord` model and the `UseYn` active/soft-deleted flag
//! - Request DTOs matching the wire field contract (`content`, `subject`,
//!   `useYn`, `page`, `size`, `sort`)
//! - Fail-fast validation of create / full-update / partial-update input
//! - Deterministic construction of dynamic WHERE / ORDER BY / SET clauses
//!   as SQL fragments with an ordered bind-value list
//!
//! Nothing here touches SQLite; the store crate executes the fragments.

pub mod errors;
pub mod logging;
pub mod model;
pub mod query;
pub mod requests;
pub mod validate;

// Re-export commonly used types
pub use errors::{EmotionError, Result};
pub use model::{EmotionRecord, UseYn};
pub use query::{build_list_query, build_patch_query, BindValue, ListQuery, SqlFragment};
pub use requests::{
    CreateRequest, ListFilter, PatchRequest, ReplaceRequest, Sort, SortColumn, SortDirection,
};
