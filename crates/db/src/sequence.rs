use sea_query::{Expr, Query, SqliteQueryBuilder};

/// Entity kinds carrying a sequential logical identifier next to their storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    FoodLog,
    MealPlan,
    Recipe,
}

impl Sequence {
    fn table_name(self) -> &'static str {
        match self {
            Sequence::FoodLog => "food_log",
            Sequence::MealPlan => "meal_plan",
            Sequence::Recipe => "recipe",
        }
    }

    fn column_name(self) -> &'static str {
        match self {
            Sequence::FoodLog => "log_id",
            Sequence::MealPlan => "plan_id",
            Sequence::Recipe => "recipe_id",
        }
    }

    /// Sub-select yielding the next identifier, evaluated inside the insert that uses it.
    pub fn next_id_expr(self) -> Expr {
        Expr::cust(format!(
            "(SELECT COALESCE(MAX(\"{column}\"), 0) + 1 FROM \"{table}\")",
            column = self.column_name(),
            table = self.table_name(),
        ))
    }

    /// Identifier the next insert would receive: highest logical id plus one, or 1 when empty.
    pub async fn next_id<'e, E>(self, executor: E) -> Result<i64, sqlx::Error>
    where
        E: sqlx::SqliteExecutor<'e>,
    {
        let sql = Query::select()
            .expr(self.next_id_expr())
            .to_string(SqliteQueryBuilder);

        sqlx::query_scalar::<_, i64>(&sql).fetch_one(executor).await
    }
}
