//! SQLite pool setup and schema bootstrap.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// `resources` table DDL. AUTOINCREMENT keeps deleted ids from being reused.
const RESOURCES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS resources (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT,
    platform TEXT,
    cost TEXT,
    description TEXT,
    tags TEXT NOT NULL DEFAULT '[]'
)
"#;

/// Open a pool on `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `resources` table if absent. Idempotent; runs on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(RESOURCES_DDL).execute(pool).await?;
    Ok(())
}
