use nutrimeal_db::table::{Post as PostTable, PostLike};
use nutrimeal_shared::{not_found, user};
use sea_query::{Expr, ExprTrait, Func, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;

use crate::command::parse_post_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeToggled {
    pub liked: bool,
    pub likes: i64,
}

impl crate::Command {
    /// Flips the user's membership in the liked-by set of a post.
    ///
    /// Runs as one transaction: remove the membership, and if there was none, add it.
    /// The returned count is the size of the set after the flip.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        post_id: &str,
        user_id: &str,
    ) -> nutrimeal_shared::Result<LikeToggled> {
        let post_id = parse_post_id(post_id)?;
        if user_id.is_empty() {
            user!("User ID is required");
        }

        let mut tx = self.write_db.begin().await?;

        let statement = Query::delete()
            .from_table(PostLike::Table)
            .and_where(Expr::col(PostLike::PostId).eq(post_id))
            .and_where(Expr::col(PostLike::UserId).eq(user_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let removed = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = removed == 0;

        if liked {
            let statement = Query::select()
                .column(PostTable::Id)
                .from(PostTable::Table)
                .and_where(Expr::col(PostTable::Id).eq(post_id))
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let exists = sqlx::query_scalar_with::<_, String, _>(&sql, values)
                .fetch_optional(&mut *tx)
                .await?;

            if exists.is_none() {
                not_found!("Post not found");
            }

            let statement = Query::insert()
                .into_table(PostLike::Table)
                .columns([PostLike::PostId, PostLike::UserId, PostLike::CreatedAt])
                .values_panic([
                    post_id.into(),
                    user_id.into(),
                    nutrimeal_shared::now().into(),
                ])
                .on_conflict(
                    OnConflict::columns([PostLike::PostId, PostLike::UserId])
                        .do_nothing()
                        .to_owned(),
                )
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let statement = Query::select()
            .expr(Func::count(Expr::col(PostLike::UserId)))
            .from(PostLike::Table)
            .and_where(Expr::col(PostLike::PostId).eq(post_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let likes = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LikeToggled { liked, likes })
    }
}
