use std::path::Path;

use anyhow::{Context, Result};
use nutrimeal::config::Config;
use nutrimeal_recipe::RecipeInput;

/// Loads a JSON array of recipes; each one gets the next logical recipe id.
#[tracing::instrument(skip(config))]
pub async fn import(config: &Config, file: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let inputs: Vec<RecipeInput> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of recipes", file.display()))?;

    let pool = nutrimeal::db::create_pool(&config.database.url, 1).await?;
    nutrimeal::db::run_migrations(&pool).await?;

    let command = nutrimeal_recipe::Command(nutrimeal_shared::State::single(pool.clone()));
    let recipes = command.import(inputs).await?;
    pool.close().await;

    match (recipes.first(), recipes.last()) {
        (Some(first), Some(last)) => tracing::info!(
            "Imported {} recipes with ids {} to {}",
            recipes.len(),
            first.recipe_id,
            last.recipe_id
        ),
        _ => tracing::info!("No recipe to import"),
    }

    Ok(())
}
