use std::{path::PathBuf, str::FromStr};

use nutrimeal_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutrimeal_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_recipes(state: &State, count: usize) -> anyhow::Result<()> {
    let cmd = nutrimeal_recipe::Command(state.clone());
    for i in 0..count {
        cmd.create(nutrimeal_recipe::RecipeInput {
            name: format!("Recipe {i}"),
            ..Default::default()
        })
        .await?;
    }

    Ok(())
}
