use std::ops::Deref;

use nutrimeal_db::table::User;
use nutrimeal_shared::{Error, not_found};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::{UserRow, query::find_by};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub height: Option<f64>,
    pub birthday: Option<String>,
}

impl UpdateUserInput {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.height.is_none() && self.birthday.is_none()
    }
}

pub enum Created {
    New(UserRow),
    Existing(UserRow),
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
    async fn insert(&self, input: CreateUserInput) -> Result<UserRow, sqlx::Error> {
        let now = nutrimeal_shared::now();
        let row = UserRow {
            id: nutrimeal_shared::new_id(),
            email: input.email,
            name: input.name,
            picture: input.picture,
            height: input.height,
            birthday: input.birthday,
            created_at: now,
            updated_at: now,
            delete_hash: None,
        };

        let statement = Query::insert()
            .into_table(User::Table)
            .columns([
                User::Id,
                User::Email,
                User::Name,
                User::Picture,
                User::Height,
                User::Birthday,
                User::CreatedAt,
                User::UpdatedAt,
            ])
            .values_panic([
                row.id.to_owned().into(),
                row.email.to_owned().into(),
                row.name.to_owned().into(),
                row.picture.to_owned().into(),
                row.height.into(),
                row.birthday.to_owned().into(),
                row.created_at.into(),
                row.updated_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(row)
    }

    /// Returns the user registered under the email, creating it first when missing.
    pub async fn create_or_get(&self, input: CreateUserInput) -> nutrimeal_shared::Result<Created> {
        input.validate()?;

        if let Some(user) = find_by(&self.write_db, User::Email, &input.email).await? {
            return Ok(Created::Existing(user));
        }

        let email = input.email.to_owned();
        match self.insert(input).await {
            Ok(user) => Ok(Created::New(user)),
            Err(err) if nutrimeal_shared::is_unique_violation(&err) => {
                match find_by(&self.write_db, User::Email, email).await? {
                    Some(user) => Ok(Created::Existing(user)),
                    None => Err(err.into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn sign_up(&self, input: CreateUserInput) -> nutrimeal_shared::Result<UserRow> {
        input.validate()?;

        if find_by(&self.write_db, User::Email, &input.email)
            .await?
            .is_some()
        {
            return Err(Error::Conflict("Email already exists".to_owned()));
        }

        match self.insert(input).await {
            Ok(user) => Ok(user),
            Err(err) if nutrimeal_shared::is_unique_violation(&err) => {
                Err(Error::Conflict("Email already exists".to_owned()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateUserInput,
    ) -> nutrimeal_shared::Result<UserRow> {
        input.validate()?;

        let id = id.into();
        if find_by(&self.write_db, User::Id, &id).await?.is_none() {
            not_found!("User not found");
        }

        if !input.is_empty() {
            let mut statement = Query::update();
            statement
                .table(User::Table)
                .value(User::UpdatedAt, nutrimeal_shared::now())
                .and_where(Expr::col(User::Id).eq(&id));

            if let Some(email) = input.email {
                statement.value(User::Email, email);
            }
            if let Some(name) = input.name {
                statement.value(User::Name, name);
            }
            if let Some(height) = input.height {
                statement.value(User::Height, height);
            }
            if let Some(birthday) = input.birthday {
                statement.value(User::Birthday, birthday);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            if let Err(err) = sqlx::query_with(&sql, values).execute(&self.write_db).await {
                if nutrimeal_shared::is_unique_violation(&err) {
                    return Err(Error::Conflict("Email already exists".to_owned()));
                }

                return Err(err.into());
            }
        }

        self.reload(id).await
    }

    /// Stores a freshly uploaded picture with the delete token of its image host.
    pub async fn set_picture(
        &self,
        id: impl Into<String>,
        link: impl Into<String>,
        delete_hash: impl Into<String>,
    ) -> nutrimeal_shared::Result<UserRow> {
        let id = id.into();
        let statement = Query::update()
            .table(User::Table)
            .value(User::Picture, link.into())
            .value(User::DeleteHash, delete_hash.into())
            .value(User::UpdatedAt, nutrimeal_shared::now())
            .and_where(Expr::col(User::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;
        if result.rows_affected() == 0 {
            not_found!("User not found");
        }

        self.reload(id).await
    }

    async fn reload(&self, id: String) -> nutrimeal_shared::Result<UserRow> {
        match find_by(&self.write_db, User::Id, id).await? {
            Some(user) => Ok(user),
            None => not_found!("User not found"),
        }
    }
}
