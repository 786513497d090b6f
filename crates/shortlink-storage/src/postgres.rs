use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use shortlink_core::repository::{Repository, Result};
use shortlink_core::{LinkRecord, ShortCode, StorageError};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

/// Bound on waiting for a pooled connection. A saturated pool surfaces
/// as [`StorageError::Timeout`] instead of blocking a call indefinitely.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Postgres implementation of the repository contract.
///
/// One row per link in the `links` table, keyed by the short code. The
/// primary key enforces uniqueness, and a duplicate-key insert surfaces
/// as [`StorageError::Conflict`] rather than a generic fault.
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    /// Creates a repository from an existing Postgres connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new bounded connection pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn parse_created_at(seconds: i64) -> Result<Timestamp> {
    Timestamp::from_second(seconds).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", seconds))
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn insert(&self, code: &ShortCode, record: LinkRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (short, url, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(code.as_str())
        .bind(record.original_url)
        .bind(record.created_at.as_second())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StorageError::Conflict(code.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        let row = sqlx::query(
            r#"
            SELECT url, created_at
            FROM links
            WHERE short = $1
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("url").map_err(map_sqlx_error)?;
        let created_at_raw: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
        let created_at = parse_created_at(created_at_raw)?;

        Ok(Some(LinkRecord {
            original_url,
            created_at,
        }))
    }
}
