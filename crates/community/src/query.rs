use std::ops::Deref;

use nutrimeal_db::table::Post as PostTable;
use sea_query::{Alias, Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Post, PostRow};

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

const LIKES: &str =
    r#"(SELECT COUNT(*) FROM "post_like" WHERE "post_like"."post_id" = "post"."id")"#;
const LIKED_BY: &str = r#"(SELECT json_group_array("post_like"."user_id") FROM "post_like" WHERE "post_like"."post_id" = "post"."id")"#;

#[derive(Clone)]
pub struct Query(pub nutrimeal_shared::State);

impl Deref for Query {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) fn select_post() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            PostTable::Id,
            PostTable::Content,
            PostTable::Image,
            PostTable::ImageType,
            PostTable::AuthorId,
            PostTable::AuthorName,
            PostTable::AuthorPicture,
            PostTable::CreatedAt,
        ])
        .expr_as(Expr::cust(LIKES), Alias::new("likes"))
        .expr_as(Expr::cust(LIKED_BY), Alias::new("liked_by"))
        .from(PostTable::Table)
        .to_owned()
}

impl Query {
    /// Newest posts first, pages start at 0.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> nutrimeal_shared::Result<Vec<Post>> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let statement = select_post()
            .order_by(PostTable::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("\"post\".rowid"), Order::Desc)
            .limit(limit.into())
            .offset(u64::from(page) * u64::from(limit))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PostRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    pub async fn find(&self, id: &str) -> nutrimeal_shared::Result<Option<Post>> {
        let statement = select_post()
            .and_where(Expr::col(PostTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, PostRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Post::from))
    }
}
