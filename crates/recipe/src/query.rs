use std::ops::Deref;

use nutrimeal_db::table::Recipe as RecipeTable;
use sea_query::{Expr, ExprTrait, Func, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Recipe, RecipePage, RecipeRow, RecipeSummary};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct Query(pub nutrimeal_shared::State);

impl Deref for Query {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select_recipe() -> SelectStatement {
    sea_query::Query::select()
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
        .from(RecipeTable::Table)
        .to_owned()
}

impl Query {
    async fn fetch_all(&self, statement: SelectStatement) -> nutrimeal_shared::Result<Vec<Recipe>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn fetch_one(&self, statement: SelectStatement) -> nutrimeal_shared::Result<Option<Recipe>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Recipe::from))
    }

    /// One page of recipes in logical id order, pages start at 1.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> nutrimeal_shared::Result<RecipePage> {
        let page = Ord::max(page.unwrap_or(DEFAULT_PAGE), 1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let statement = select_recipe()
            .order_by(RecipeTable::RecipeId, Order::Asc)
            .limit(limit.into())
            .offset(u64::from(page - 1) * u64::from(limit))
            .to_owned();
        let recipes = self.fetch_all(statement).await?;

        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(RecipeTable::Id)))
            .from(RecipeTable::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let total = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(RecipePage {
            recipes,
            total,
            page,
            limit,
        })
    }

    /// Looks a recipe up by storage key, or by logical id when the value is numeric.
    pub async fn find(&self, id: &str) -> nutrimeal_shared::Result<Option<Recipe>> {
        let statement = if nutrimeal_shared::is_id(id) {
            select_recipe()
                .and_where(Expr::col(RecipeTable::Id).eq(id))
                .limit(1)
                .to_owned()
        } else if let Ok(recipe_id) = id.parse::<i64>() {
            select_recipe()
                .and_where(Expr::col(RecipeTable::RecipeId).eq(recipe_id))
                .limit(1)
                .to_owned()
        } else {
            nutrimeal_shared::user!("Invalid recipe ID format");
        };

        self.fetch_one(statement).await
    }

    pub async fn by_category(&self, category: &str) -> nutrimeal_shared::Result<Vec<Recipe>> {
        let statement = select_recipe()
            .and_where(Expr::col(RecipeTable::Category).eq(category))
            .order_by(RecipeTable::RecipeId, Order::Asc)
            .to_owned();

        self.fetch_all(statement).await
    }

    /// Every recipe reduced to what meal planning needs.
    pub async fn summaries(&self) -> nutrimeal_shared::Result<Vec<RecipeSummary>> {
        let statement = sea_query::Query::select()
            .columns([RecipeTable::RecipeId, RecipeTable::Name])
            .from(RecipeTable::Table)
            .order_by(RecipeTable::RecipeId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeSummary, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
