use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    #[serde(default)]
    pub calories: i64,
    #[serde(default)]
    pub protein: i64,
    #[serde(default)]
    pub carbs: i64,
    #[serde(default)]
    pub fat: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub recipe_id: i64,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub nutrition_info: NutritionInfo,
    pub category: String,
    pub tips: String,
    #[serde(rename = "preparationTime")]
    pub preparation_time: String,
    pub difficulty: String,
    pub allergens: Vec<String>,
}

#[derive(Debug, FromRow)]
pub(crate) struct RecipeRow {
    pub id: String,
    pub recipe_id: i64,
    pub name: String,
    pub ingredients: Json<Vec<Ingredient>>,
    pub instructions: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub category: String,
    pub tips: String,
    pub preparation_time: String,
    pub difficulty: String,
    pub allergens: Json<Vec<String>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            recipe_id: row.recipe_id,
            name: row.name,
            ingredients: row.ingredients.0,
            instructions: row.instructions,
            nutrition_info: NutritionInfo {
                calories: row.calories,
                protein: row.protein,
                carbs: row.carbs,
                fat: row.fat,
            },
            category: row.category,
            tips: row.tips,
            preparation_time: row.preparation_time,
            difficulty: row.difficulty,
            allergens: row.allergens.0,
        }
    }
}

/// Candidate for meal planning: the logical id and the display name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RecipeSummary {
    pub recipe_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub nutrition_info: NutritionInfo,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tips: String,
    #[serde(rename = "preparationTime", default)]
    pub preparation_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub allergens: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}
