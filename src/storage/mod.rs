use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub mod account_repo;
pub mod message_repo;
pub mod records;

pub type DbPool = Pool<Sqlite>;

/// Initializes the database connection pool, creating the database file if
/// it does not exist yet.
///
/// # Errors
/// Returns `sqlx::Error` if the URL is invalid or the connection fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await
}

/// Creates the schema if it is not already present. Idempotent; runs at
/// every boot in place of migration tooling.
///
/// # Errors
/// Returns `sqlx::Error` if a DDL statement fails.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS account (
            account_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS message (
            message_id INTEGER PRIMARY KEY AUTOINCREMENT,
            posted_by INTEGER NOT NULL REFERENCES account (account_id),
            message_text TEXT NOT NULL,
            time_posted_epoch INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
