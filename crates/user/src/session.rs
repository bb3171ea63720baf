//! Server-side sessions keyed by the opaque token carried in the session cookie.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use nutrimeal_db::table::Session;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: String,
    pub user_id: String,
    pub expires_at: i64,
}

fn new_token() -> String {
    URL_SAFE_NO_PAD.encode(rand::random::<[u8; 32]>())
}

impl crate::Command {
    /// Opens a session for the user, replacing the one held by `previous` if any.
    pub async fn create_session(
        &self,
        user_id: impl Into<String>,
        ttl_secs: i64,
        previous: Option<&str>,
    ) -> nutrimeal_shared::Result<SessionRow> {
        let now = nutrimeal_shared::now();
        self.purge_expired_sessions(now).await?;

        if let Some(previous) = previous {
            self.destroy_session(previous).await?;
        }

        let row = SessionRow {
            id: new_token(),
            user_id: user_id.into(),
            expires_at: now + ttl_secs,
        };

        let statement = Query::insert()
            .into_table(Session::Table)
            .columns([
                Session::Id,
                Session::UserId,
                Session::ExpiresAt,
                Session::CreatedAt,
            ])
            .values_panic([
                row.id.to_owned().into(),
                row.user_id.to_owned().into(),
                row.expires_at.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(row)
    }

    pub async fn destroy_session(&self, id: impl Into<String>) -> nutrimeal_shared::Result<bool> {
        let statement = Query::delete()
            .from_table(Session::Table)
            .and_where(Expr::col(Session::Id).eq(id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn purge_expired_sessions(&self, now: i64) -> nutrimeal_shared::Result<u64> {
        let statement = Query::delete()
            .from_table(Session::Table)
            .and_where(Expr::col(Session::ExpiresAt).lte(now))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() > 0 {
            tracing::debug!(purged = result.rows_affected(), "expired sessions removed");
        }

        Ok(result.rows_affected())
    }
}

impl crate::Query {
    /// Live session for the token; expired rows are treated as absent.
    pub async fn find_session(
        &self,
        id: impl Into<String>,
    ) -> nutrimeal_shared::Result<Option<SessionRow>> {
        let statement = Query::select()
            .columns([Session::Id, Session::UserId, Session::ExpiresAt])
            .from(Session::Table)
            .and_where(Expr::col(Session::Id).eq(id.into()))
            .and_where(Expr::col(Session::ExpiresAt).gt(nutrimeal_shared::now()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, SessionRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::new_token;

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let a = new_token();
        let b = new_token();

        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
