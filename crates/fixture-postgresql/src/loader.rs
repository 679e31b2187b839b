//! Transactional fixture loading.

use crate::error::FixtureError;
use crate::insert::build_insert;
use fixture_core::TableRows;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Transaction};
use tracing::{debug, info};

/// Default timeout for a whole load call.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Loads fixture rows into PostgreSQL inside a single transaction.
///
/// A loader carries only configuration; every call acquires its own
/// transaction and shares no state with other calls, so one loader can be
/// reused (or cloned) across concurrent tests.
///
/// # Example
///
/// ```ignore
/// use fixture_postgresql::{FixtureLoader, Row, TableRows};
///
/// let loader = FixtureLoader::new().with_timeout(Duration::from_secs(30));
/// loader
///     .load_rows(
///         &mut client,
///         &TableRows::new("users").row(Row::new().with("id", 1_i32).with("name", "alice")),
///     )
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    timeout: Duration,
}

impl Default for FixtureLoader {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }
}

impl FixtureLoader {
    /// Create a loader with the default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout for a whole load call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Insert every row of every table in one transaction.
    ///
    /// Tables are processed in order (the caller sequences them to satisfy
    /// foreign keys), rows within a table in order. If any statement or the
    /// commit fails, or the configured timeout elapses, nothing persists:
    /// the transaction rolls back when its guard drops uncommitted.
    pub async fn load_tables(
        &self,
        client: &mut Client,
        tables: &[TableRows],
    ) -> Result<(), FixtureError> {
        match tokio::time::timeout(self.timeout, load_batch(client, tables)).await {
            Ok(result) => result,
            Err(_) => Err(FixtureError::Timeout {
                timeout: self.timeout,
            }),
        }
    }

    /// Insert all rows of a single table. Equivalent to [`Self::load_tables`]
    /// with a one-element batch.
    pub async fn load_rows(
        &self,
        client: &mut Client,
        rows: &TableRows,
    ) -> Result<(), FixtureError> {
        self.load_tables(client, std::slice::from_ref(rows)).await
    }
}

/// Insert every row of every table in one transaction, with the default
/// timeout.
pub async fn load_tables(client: &mut Client, tables: &[TableRows]) -> Result<(), FixtureError> {
    FixtureLoader::new().load_tables(client, tables).await
}

/// Insert all rows of a single table, with the default timeout.
pub async fn load_rows(client: &mut Client, rows: &TableRows) -> Result<(), FixtureError> {
    FixtureLoader::new().load_rows(client, rows).await
}

async fn load_batch(client: &mut Client, tables: &[TableRows]) -> Result<(), FixtureError> {
    let tx = client.transaction().await?;
    for table_rows in tables {
        insert_table_rows(&tx, table_rows).await?;
    }
    tx.commit().await?;
    Ok(())
}

async fn insert_table_rows(
    tx: &Transaction<'_>,
    table_rows: &TableRows,
) -> Result<(), FixtureError> {
    info!(
        "loading {} rows into table '{}'",
        table_rows.len(),
        table_rows.table
    );

    for row in &table_rows.rows {
        let (sql, params) = build_insert(&table_rows.table, row)?;
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        debug!("executing: {}", sql);
        tx.execute(&sql, &param_refs)
            .await
            .map_err(|e| FixtureError::Insert {
                table: table_rows.table.clone(),
                row: row.to_string(),
                source: e,
            })?;
    }

    Ok(())
}

/// Truncate the named tables, cascading to dependents. For resetting
/// database state between tests; runs outside any fixture transaction.
pub async fn truncate_tables(client: &Client, tables: &[&str]) -> Result<(), FixtureError> {
    for table in tables {
        let sql = format!("TRUNCATE TABLE \"{table}\" CASCADE");
        info!("truncating table '{}'", table);
        client.execute(&sql, &[]).await?;
    }
    Ok(())
}

/// Get the row count for a table.
pub async fn row_count(client: &Client, table: &str) -> Result<u64, FixtureError> {
    let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
    let row = client.query_one(&sql, &[]).await?;
    let count: i64 = row.get(0);
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(FixtureLoader::new().timeout(), DEFAULT_LOAD_TIMEOUT);
        assert_eq!(DEFAULT_LOAD_TIMEOUT, Duration::from_secs(5));
    }

    #[test]
    fn test_with_timeout_overrides_default() {
        let loader = FixtureLoader::new().with_timeout(Duration::from_secs(30));
        assert_eq!(loader.timeout(), Duration::from_secs(30));
    }
}
