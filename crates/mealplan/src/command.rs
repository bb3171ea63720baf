use std::ops::Deref;

use nutrimeal_db::{Sequence, table::MealPlan as MealPlanTable};
use nutrimeal_shared::Error;
use sea_query::{Query as Statement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{GenerateInput, MealPlan, Query, select_meals};

const PLAN_EXISTS: &str = "A meal plan already exists for this date";

#[derive(Clone)]
pub struct Command(pub nutrimeal_shared::State);

impl Deref for Command {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Generates the single plan a user may have for a date from three random recipes.
    #[tracing::instrument(skip(self, input), fields(user_id = %input.user_id, date = %input.date))]
    pub async fn generate(&self, input: GenerateInput) -> nutrimeal_shared::Result<MealPlan> {
        input.validate()?;

        let query = Query(self.0.clone());
        if query
            .find_for_date(&input.user_id, &input.date)
            .await?
            .is_some()
        {
            return Err(Error::User(PLAN_EXISTS.to_owned()));
        }

        let recipes = nutrimeal_recipe::Query(self.0.clone()).summaries().await?;
        let selection = {
            let mut rng = rand::rng();
            select_meals(recipes, &mut rng)?
        };

        let id = nutrimeal_shared::new_id();
        let statement = Statement::insert()
            .into_table(MealPlanTable::Table)
            .columns([
                MealPlanTable::Id,
                MealPlanTable::PlanId,
                MealPlanTable::UserId,
                MealPlanTable::Date,
                MealPlanTable::Breakfast,
                MealPlanTable::Lunch,
                MealPlanTable::Dinner,
                MealPlanTable::BreakfastRecipeId,
                MealPlanTable::LunchRecipeId,
                MealPlanTable::DinnerRecipeId,
                MealPlanTable::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                Sequence::MealPlan.next_id_expr(),
                input.user_id.to_owned().into(),
                input.date.to_owned().into(),
                selection.meals.breakfast.to_owned().into(),
                selection.meals.lunch.to_owned().into(),
                selection.meals.dinner.to_owned().into(),
                selection.recipe_ids[0].into(),
                selection.recipe_ids[1].into(),
                selection.recipe_ids[2].into(),
                nutrimeal_shared::now().into(),
            ])
            .returning_col(MealPlanTable::PlanId)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let plan_id = match sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&self.write_db)
            .await
        {
            Ok(plan_id) => plan_id,
            Err(err) if nutrimeal_shared::is_unique_violation(&err) => {
                return Err(Error::User(PLAN_EXISTS.to_owned()));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(plan_id, "meal plan generated");

        Ok(MealPlan {
            id,
            plan_id,
            user_id: input.user_id,
            date: input.date,
            meal: selection.meals,
            recipes: selection.recipe_ids.to_vec(),
        })
    }
}
