//! Core types for the dbfixture test-fixture loader.
//!
//! This crate provides the database-agnostic building blocks shared by the
//! loader crates:
//!
//! - [`FixtureValue`] - Tagged scalar values bound into INSERT statements
//! - [`Row`] - A single record as a column-name-to-value mapping
//! - [`TableRows`] - All rows destined for one table
//! - [`normalize_time`] - Canonical timestamp form for write/read-back comparisons
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Row, TableRows};
//!
//! let users = TableRows::new("users")
//!     .row(Row::new().with("id", 1_i32).with("name", "alice"))
//!     .row(Row::new().with("id", 2_i32).with("name", "bob"));
//!
//! assert_eq!(users.len(), 2);
//! ```

pub mod row;
pub mod time;
pub mod value;

// Re-exports for convenience
pub use row::{Row, TableRows};
pub use time::normalize_time;
pub use value::FixtureValue;
