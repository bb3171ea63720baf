use std::ops::Deref;

use nutrimeal_db::table::User;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRow {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: String,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub created_at: i64,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub updated_at: i64,
    #[serde(skip)]
    pub delete_hash: Option<String>,
}

/// Public projection returned by the auth and lookup endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl From<UserRow> for UserSummary {
    fn from(value: UserRow) -> Self {
        Self {
            id: value.id,
            email: value.email,
            name: value.name,
            picture: value.picture,
        }
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

pub(crate) fn select_user() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Name,
            User::Picture,
            User::Height,
            User::Birthday,
            User::CreatedAt,
            User::UpdatedAt,
            User::DeleteHash,
        ])
        .from(User::Table)
        .to_owned()
}

pub(crate) async fn find_by<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    col: User,
    value: impl Into<String>,
) -> nutrimeal_shared::Result<Option<UserRow>> {
    let statement = select_user()
        .and_where(Expr::col(col).eq(value.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(executor)
        .await?)
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> nutrimeal_shared::Result<Option<UserRow>> {
        find_by(&self.read_db, User::Id, id).await
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> nutrimeal_shared::Result<Option<UserRow>> {
        find_by(&self.read_db, User::Email, email).await
    }
}
