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
pub fn recipe(name: &str, category: &str) -> nutrimeal_recipe::RecipeInput {
    nutrimeal_recipe::RecipeInput {
        name: name.to_owned(),
        ingredients: vec![nutrimeal_recipe::Ingredient {
            name: "oats".to_owned(),
            amount: "50g".to_owned(),
        }],
        instructions: "Mix and serve.".to_owned(),
        nutrition_info: nutrimeal_recipe::NutritionInfo {
            calories: 350,
            protein: 12,
            carbs: 55,
            fat: 8,
        },
        category: category.to_owned(),
        preparation_time: "10 min".to_owned(),
        difficulty: "easy".to_owned(),
        allergens: vec!["gluten".to_owned()],
        ..Default::default()
    }
}
