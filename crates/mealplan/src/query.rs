use std::ops::Deref;

use nutrimeal_db::table::MealPlan as MealPlanTable;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{MealPlan, MealPlanRow};

#[derive(Clone)]
pub struct Query(pub nutrimeal_shared::State);

impl Deref for Query {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) fn select_meal_plan() -> sea_query::SelectStatement {
    sea_query::Query::select()
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
        ])
        .from(MealPlanTable::Table)
        .to_owned()
}

impl Query {
    pub async fn by_user(&self, user_id: &str) -> nutrimeal_shared::Result<Vec<MealPlan>> {
        let statement = select_meal_plan()
            .and_where(Expr::col(MealPlanTable::UserId).eq(user_id))
            .order_by(MealPlanTable::PlanId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(MealPlan::from).collect())
    }

    pub async fn find_for_date(
        &self,
        user_id: &str,
        date: &str,
    ) -> nutrimeal_shared::Result<Option<MealPlan>> {
        let statement = select_meal_plan()
            .and_where(Expr::col(MealPlanTable::UserId).eq(user_id))
            .and_where(Expr::col(MealPlanTable::Date).eq(date))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        Ok(row.map(MealPlan::from))
    }
}
