mod date;
mod error;
mod id;

pub use date::*;
pub use error::*;
pub use id::*;

/// Store handles shared by every command and query.
///
/// Writes go through `write_db` (a single connection), reads through `read_db`.
/// Tests pass the same pool for both.
#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    pub fn new(read_db: sqlx::SqlitePool, write_db: sqlx::SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}
