//! Shared domain types and pure UI logic for the thoughts clients.
//!
//! Everything in this crate is plain data and arithmetic so it compiles for
//! both the native CLI/client and the wasm apps.

pub mod model;
pub mod pagination;
pub mod rating;
pub mod sort;
pub mod validate;

pub use model::{CreateThoughtRequest, Thought, ThoughtStatus, UpdateThoughtRequest, truncate};
pub use pagination::Pager;
pub use rating::{Dominant, RatingSummary, rating_summary};
pub use sort::{SortDirection, SortField, SortState, sort_thoughts};
pub use validate::{
    AUTHOR_MAX, CONTENT_MAX, CONTENT_MIN, FieldErrors, validate_thought_fields,
};
