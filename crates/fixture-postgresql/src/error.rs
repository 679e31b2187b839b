//! Error types for the PostgreSQL fixture loader.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading fixtures.
///
/// None of these are recovered or retried internally; every error
/// propagates immediately so the invoking test fails visibly.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A row has no columns, so no valid INSERT can be built for it.
    #[error("row for table '{table}' has no columns")]
    EmptyRow {
        /// Target table of the offending row.
        table: String,
    },

    /// Executing a row INSERT failed (constraint violation, unknown
    /// column, type mismatch, connection loss).
    #[error("failed to insert into '{table}' (row {row}): {source}")]
    Insert {
        /// Target table of the offending row.
        table: String,
        /// Rendered contents of the offending row.
        row: String,
        /// Driver error.
        source: tokio_postgres::Error,
    },

    /// Transaction begin/commit or helper-query failure.
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// The whole load did not finish within the configured timeout.
    #[error("fixture load timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },
}
