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
pub fn post(content: &str, author_id: &str) -> nutrimeal_community::CreatePostInput {
    nutrimeal_community::CreatePostInput {
        content: content.to_owned(),
        author_id: Some(author_id.to_owned()),
        author_name: Some(format!("{author_id} name")),
        author_picture: Some(format!("https://i.imgur.com/{author_id}.png")),
        image: None,
    }
}
