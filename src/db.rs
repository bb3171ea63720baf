use std::str::FromStr;

use anyhow::Result;
use sqlx::{
    ConnectOptions, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use sqlx_migrator::{Migrate, Plan};
use tracing::log::LevelFilter;

const PRAGMAS: [&str; 3] = [
    "PRAGMA cache_size = -20000",
    "PRAGMA foreign_keys = true",
    "PRAGMA temp_store = memory",
];

fn options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .log_statements(LevelFilter::Debug))
}

async fn connect(options: SqliteConnectOptions, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    for pragma in PRAGMAS {
        sqlx::query(pragma).execute(&pool).await?;
    }

    Ok(pool)
}

/// Read-only connections shared by every query.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = connect(options(database_url)?.read_only(true), max_connections).await?;
    tracing::info!(max_connections, "read pool ready");

    Ok(pool)
}

/// Single writer; logical id allocation and like toggles queue behind it.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let pool = connect(options(database_url)?.create_if_missing(true), 1).await?;
    tracing::info!("write pool ready");

    Ok(pool)
}

/// Read-write pool for CLI commands and tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = connect(options(database_url)?.create_if_missing(true), max_connections).await?;
    tracing::debug!(max_connections, "pool ready");

    Ok(pool)
}

#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    nutrimeal_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}
