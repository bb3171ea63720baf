use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutrimeal_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn insert_food_log(pool: &SqlitePool, id: &str, log_id: i64) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO food_log (id, log_id, user_id, food_name, created_at) VALUES (?, ?, 'u1', 'apple', 0)",
    )
    .bind(id)
    .bind(log_id)
    .execute(pool)
    .await?;

    Ok(())
}

#[allow(dead_code)]
pub async fn insert_recipe(pool: &SqlitePool, id: &str, recipe_id: i64) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO recipe (id, recipe_id, name) VALUES (?, ?, ?)")
        .bind(id)
        .bind(recipe_id)
        .bind(format!("recipe {recipe_id}"))
        .execute(pool)
        .await?;

    Ok(())
}
