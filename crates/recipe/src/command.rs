use std::ops::Deref;

use nutrimeal_db::{Sequence, table::Recipe as RecipeTable};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{Recipe, RecipeInput};

#[derive(Clone)]
pub struct Command(pub nutrimeal_shared::State);

impl Deref for Command {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn insert<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    input: RecipeInput,
) -> nutrimeal_shared::Result<Recipe> {
    input.validate()?;

    let id = nutrimeal_shared::new_id();
    let statement = Query::insert()
        .into_table(RecipeTable::Table)
        .columns([
            RecipeTable::Id,
            RecipeTable::RecipeId,
            RecipeTable::Name,
            RecipeTable::Ingredients,
            RecipeTable::Instructions,
            RecipeTable::Calories,
            RecipeTable::Protein,
            RecipeTable::Carbs,
            RecipeTable::Fat,
            RecipeTable::Category,
            RecipeTable::Tips,
            RecipeTable::PreparationTime,
            RecipeTable::Difficulty,
            RecipeTable::Allergens,
        ])
        .values_panic([
            id.to_owned().into(),
            Sequence::Recipe.next_id_expr(),
            input.name.to_owned().into(),
            serde_json::to_string(&input.ingredients)?.into(),
            input.instructions.to_owned().into(),
            input.nutrition_info.calories.into(),
            input.nutrition_info.protein.into(),
            input.nutrition_info.carbs.into(),
            input.nutrition_info.fat.into(),
            input.category.to_owned().into(),
            input.tips.to_owned().into(),
            input.preparation_time.to_owned().into(),
            input.difficulty.to_owned().into(),
            serde_json::to_string(&input.allergens)?.into(),
        ])
        .returning_col(RecipeTable::RecipeId)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let recipe_id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(executor)
        .await?;

    Ok(Recipe {
        id,
        recipe_id,
        name: input.name,
        ingredients: input.ingredients,
        instructions: input.instructions,
        nutrition_info: input.nutrition_info,
        category: input.category,
        tips: input.tips,
        preparation_time: input.preparation_time,
        difficulty: input.difficulty,
        allergens: input.allergens,
    })
}

impl Command {
    /// Stores a recipe under the next logical id.
    pub async fn create(&self, input: RecipeInput) -> nutrimeal_shared::Result<Recipe> {
        insert(&self.write_db, input).await
    }

    /// Stores every recipe or none, ids assigned in input order.
    pub async fn import(&self, inputs: Vec<RecipeInput>) -> nutrimeal_shared::Result<Vec<Recipe>> {
        let mut tx = self.write_db.begin().await?;
        let mut recipes = Vec::with_capacity(inputs.len());

        for input in inputs {
            recipes.push(insert(&mut *tx, input).await?);
        }

        tx.commit().await?;
        tracing::info!(count = recipes.len(), "recipes imported");

        Ok(recipes)
    }
}
