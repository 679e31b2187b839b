//! Transactional PostgreSQL fixture loading for integration tests.
//!
//! Given in-memory row data, this crate inserts it into PostgreSQL inside a
//! single transaction so tests can set up known state: either every row of
//! the batch commits or none do. Any failure carries the offending table
//! name and the full row contents so the calling test fails with a usable
//! diagnostic.
//!
//! # Example
//!
//! ```ignore
//! use fixture_postgresql::{load_tables, normalize_time, Row, TableRows};
//!
//! let batch = vec![
//!     TableRows::new("orders").row(Row::new().with("id", 1_i32)),
//!     TableRows::new("order_items")
//!         .row(Row::new().with("id", 10_i32).with("order_id", 1_i32)),
//! ];
//!
//! // Tables load in order, so foreign-key parents go first.
//! load_tables(&mut client, &batch).await?;
//! ```
//!
//! Connection management is the caller's concern: the loader borrows a
//! [`tokio_postgres::Client`] for the duration of one call.

pub mod error;
mod insert;
pub mod loader;

pub use error::FixtureError;
pub use loader::{
    load_rows, load_tables, row_count, truncate_tables, FixtureLoader, DEFAULT_LOAD_TIMEOUT,
};

// Re-export the core data model so callers need a single import.
pub use fixture_core::{normalize_time, FixtureValue, Row, TableRows};
