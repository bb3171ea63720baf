use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meals {
    #[serde(rename = "Breakfast")]
    pub breakfast: String,
    #[serde(rename = "Lunch")]
    pub lunch: String,
    #[serde(rename = "Dinner")]
    pub dinner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub plan_id: i64,
    pub user_id: String,
    pub date: String,
    pub meal: Meals,
    pub recipes: Vec<i64>,
}

#[derive(Debug, FromRow)]
pub(crate) struct MealPlanRow {
    pub id: String,
    pub plan_id: i64,
    pub user_id: String,
    pub date: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub breakfast_recipe_id: i64,
    pub lunch_recipe_id: i64,
    pub dinner_recipe_id: i64,
}

impl From<MealPlanRow> for MealPlan {
    fn from(row: MealPlanRow) -> Self {
        Self {
            id: row.id,
            plan_id: row.plan_id,
            user_id: row.user_id,
            date: row.date,
            meal: Meals {
                breakfast: row.breakfast,
                lunch: row.lunch,
                dinner: row.dinner,
            },
            recipes: vec![
                row.breakfast_recipe_id,
                row.lunch_recipe_id,
                row.dinner_recipe_id,
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 32, message = "date is required"))]
    pub date: String,
}
