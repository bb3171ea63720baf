use std::{path::PathBuf, str::FromStr};

use nutrimeal_shared::State;
use nutrimeal_user::{CreateUserInput, Created};
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
pub async fn create_user(state: &State, name: impl Into<String>) -> anyhow::Result<String> {
    let name = name.into();
    let cmd = nutrimeal_user::Command(state.clone());
    let created = cmd
        .create_or_get(CreateUserInput {
            email: format!("{name}@nutrimeal.localhost"),
            name,
            ..Default::default()
        })
        .await?;

    let user = match created {
        Created::New(user) | Created::Existing(user) => user,
    };

    Ok(user.id)
}
