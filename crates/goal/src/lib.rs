use std::ops::Deref;

use nutrimeal_db::table::HealthGoal;
use nutrimeal_shared::not_found;
use sea_query::{Expr, ExprTrait, Order, Query as Statement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoalRow {
    pub id: String,
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub target_weight: f64,
    pub current_weight: f64,
    pub activity_level: String,
    pub dietary_preferences: Json<Vec<String>>,
    pub weekly_goal: String,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub created_at: i64,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub updated_at: i64,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalInput {
    #[serde(rename = "user_id", default)]
    pub user_id: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub target_weight: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub current_weight: f64,
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    #[serde(default)]
    pub weekly_goal: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalInput {
    #[validate(range(min = 0.0, max = 1000.0))]
    pub target_weight: Option<f64>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub current_weight: Option<f64>,
    pub activity_level: Option<String>,
    pub dietary_preferences: Option<Vec<String>>,
    pub weekly_goal: Option<String>,
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
    pub async fn create(&self, input: CreateGoalInput) -> nutrimeal_shared::Result<HealthGoalRow> {
        let user_id = nutrimeal_shared::parse_id(&input.user_id, "user ID")?;
        input.validate()?;

        let now = nutrimeal_shared::now();
        let row = HealthGoalRow {
            id: nutrimeal_shared::new_id(),
            user_id,
            target_weight: input.target_weight,
            current_weight: input.current_weight,
            activity_level: input.activity_level,
            dietary_preferences: Json(input.dietary_preferences),
            weekly_goal: input.weekly_goal,
            created_at: now,
            updated_at: now,
        };

        let statement = Statement::insert()
            .into_table(HealthGoal::Table)
            .columns([
                HealthGoal::Id,
                HealthGoal::UserId,
                HealthGoal::TargetWeight,
                HealthGoal::CurrentWeight,
                HealthGoal::ActivityLevel,
                HealthGoal::DietaryPreferences,
                HealthGoal::WeeklyGoal,
                HealthGoal::CreatedAt,
                HealthGoal::UpdatedAt,
            ])
            .values_panic([
                row.id.to_owned().into(),
                row.user_id.to_owned().into(),
                row.target_weight.into(),
                row.current_weight.into(),
                row.activity_level.to_owned().into(),
                serde_json::to_string(&row.dietary_preferences.0)?.into(),
                row.weekly_goal.to_owned().into(),
                row.created_at.into(),
                row.updated_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(row)
    }

    /// Applies the provided fields to the most recent goal of the user.
    pub async fn update(
        &self,
        user_id: &str,
        input: UpdateGoalInput,
    ) -> nutrimeal_shared::Result<()> {
        let user_id = nutrimeal_shared::parse_id(user_id, "user ID")?;
        input.validate()?;

        let Some(goal) = find_latest(&self.write_db, &user_id).await? else {
            not_found!("Health goal not found");
        };

        let mut statement = Statement::update();
        statement
            .table(HealthGoal::Table)
            .value(HealthGoal::UpdatedAt, nutrimeal_shared::now())
            .and_where(Expr::col(HealthGoal::Id).eq(goal.id));

        if let Some(target_weight) = input.target_weight {
            statement.value(HealthGoal::TargetWeight, target_weight);
        }
        if let Some(current_weight) = input.current_weight {
            statement.value(HealthGoal::CurrentWeight, current_weight);
        }
        if let Some(activity_level) = input.activity_level {
            statement.value(HealthGoal::ActivityLevel, activity_level);
        }
        if let Some(dietary_preferences) = input.dietary_preferences {
            statement.value(
                HealthGoal::DietaryPreferences,
                serde_json::to_string(&dietary_preferences)?,
            );
        }
        if let Some(weekly_goal) = input.weekly_goal {
            statement.value(HealthGoal::WeeklyGoal, weekly_goal);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
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
    pub async fn latest(&self, user_id: &str) -> nutrimeal_shared::Result<Option<HealthGoalRow>> {
        let user_id = nutrimeal_shared::parse_id(user_id, "user ID")?;

        find_latest(&self.read_db, &user_id).await
    }
}

async fn find_latest<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    user_id: &str,
) -> nutrimeal_shared::Result<Option<HealthGoalRow>> {
    let statement = Statement::select()
        .columns([
            HealthGoal::Id,
            HealthGoal::UserId,
            HealthGoal::TargetWeight,
            HealthGoal::CurrentWeight,
            HealthGoal::ActivityLevel,
            HealthGoal::DietaryPreferences,
            HealthGoal::WeeklyGoal,
            HealthGoal::CreatedAt,
            HealthGoal::UpdatedAt,
        ])
        .from(HealthGoal::Table)
        .and_where(Expr::col(HealthGoal::UserId).eq(user_id))
        .order_by(HealthGoal::CreatedAt, Order::Desc)
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, HealthGoalRow, _>(&sql, values)
        .fetch_optional(executor)
        .await?)
}
