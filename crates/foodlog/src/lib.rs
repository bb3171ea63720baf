use std::ops::Deref;

use nutrimeal_db::{Sequence, table::FoodLog};
use sea_query::{Expr, ExprTrait, Order, Query as Statement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FoodLogRow {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub log_id: i64,
    pub user_id: String,
    pub food_name: String,
    pub food_id: i64,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub meal_time: String,
    pub date: String,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFoodLogInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub food_name: String,
    #[serde(default)]
    pub food_id: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub calories: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub protein: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub carbs: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub fat: i64,
    #[serde(default)]
    pub meal_time: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone)]
pub struct Command(pub nutrimeal_shared::State);

impl Deref for Command {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Records an entry under the next logical log id.
    pub async fn create(&self, input: CreateFoodLogInput) -> nutrimeal_shared::Result<FoodLogRow> {
        input.validate()?;

        let id = nutrimeal_shared::new_id();
        let created_at = nutrimeal_shared::now();
        let statement = Statement::insert()
            .into_table(FoodLog::Table)
            .columns([
                FoodLog::Id,
                FoodLog::LogId,
                FoodLog::UserId,
                FoodLog::FoodName,
                FoodLog::FoodId,
                FoodLog::Calories,
                FoodLog::Protein,
                FoodLog::Carbs,
                FoodLog::Fat,
                FoodLog::MealTime,
                FoodLog::Date,
                FoodLog::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                Sequence::FoodLog.next_id_expr(),
                input.user_id.to_owned().into(),
                input.food_name.to_owned().into(),
                input.food_id.into(),
                input.calories.into(),
                input.protein.into(),
                input.carbs.into(),
                input.fat.into(),
                input.meal_time.to_owned().into(),
                input.date.to_owned().into(),
                created_at.into(),
            ])
            .returning_col(FoodLog::LogId)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let log_id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&self.write_db)
            .await?;

        Ok(FoodLogRow {
            id,
            log_id,
            user_id: input.user_id,
            food_name: input.food_name,
            food_id: input.food_id,
            calories: input.calories,
            protein: input.protein,
            carbs: input.carbs,
            fat: input.fat,
            meal_time: input.meal_time,
            date: input.date,
            created_at,
        })
    }
}

#[derive(Clone)]
pub struct Query(pub nutrimeal_shared::State);

impl Deref for Query {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    pub async fn by_user(&self, user_id: &str) -> nutrimeal_shared::Result<Vec<FoodLogRow>> {
        let statement = Statement::select()
            .columns([
                FoodLog::Id,
                FoodLog::LogId,
                FoodLog::UserId,
                FoodLog::FoodName,
                FoodLog::FoodId,
                FoodLog::Calories,
                FoodLog::Protein,
                FoodLog::Carbs,
                FoodLog::Fat,
                FoodLog::MealTime,
                FoodLog::Date,
                FoodLog::CreatedAt,
            ])
            .from(FoodLog::Table)
            .and_where(Expr::col(FoodLog::UserId).eq(user_id))
            .order_by(FoodLog::LogId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, FoodLogRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
