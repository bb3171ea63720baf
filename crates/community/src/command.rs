use std::ops::Deref;

use nutrimeal_db::table::{Post as PostTable, PostLike};
use nutrimeal_shared::{forbidden, not_found, user};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Author, CreatePostInput, MAX_IMAGE_BYTES, Post};

#[derive(Clone)]
pub struct Command(pub nutrimeal_shared::State);

impl Deref for Command {
    type Target = nutrimeal_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) fn parse_post_id(id: &str) -> nutrimeal_shared::Result<&str> {
    if !nutrimeal_shared::is_id(id) {
        user!("Invalid post ID");
    }

    Ok(id)
}

impl Command {
    pub async fn create(&self, input: CreatePostInput) -> nutrimeal_shared::Result<Post> {
        if input.content.trim().is_empty() {
            user!("Content is required");
        }

        let (Some(author_id), Some(author_name), Some(author_picture)) =
            (input.author_id, input.author_name, input.author_picture)
        else {
            user!("Author information is incomplete");
        };

        if input
            .image
            .as_ref()
            .is_some_and(|image| image.data.len() > MAX_IMAGE_BYTES)
        {
            user!("Image too large (max 5MB)");
        }

        let (image, image_type) = match input.image {
            Some(image) if !image.data.is_empty() => (Some(image.data), image.content_type),
            _ => (None, None),
        };

        let post = Post {
            id: nutrimeal_shared::new_id(),
            content: input.content,
            image,
            image_type,
            created_at: nutrimeal_shared::now(),
            likes: 0,
            liked_by: vec![],
            author: Author {
                id: author_id,
                name: author_name,
                picture: author_picture,
            },
        };

        let statement = Query::insert()
            .into_table(PostTable::Table)
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
            .values_panic([
                post.id.to_owned().into(),
                post.content.to_owned().into(),
                post.image.to_owned().into(),
                post.image_type.to_owned().into(),
                post.author.id.to_owned().into(),
                post.author.name.to_owned().into(),
                post.author.picture.to_owned().into(),
                post.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(post)
    }

    /// Deletes a post together with its likes; only the author may do so.
    pub async fn delete(&self, post_id: &str, user_id: &str) -> nutrimeal_shared::Result<()> {
        let post_id = parse_post_id(post_id)?;
        if user_id.is_empty() {
            user!("User ID is required");
        }

        let mut tx = self.write_db.begin().await?;

        let statement = Query::select()
            .column(PostTable::AuthorId)
            .from(PostTable::Table)
            .and_where(Expr::col(PostTable::Id).eq(post_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let author_id = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?;

        match author_id {
            None => not_found!("Post not found"),
            Some(author_id) if author_id != user_id => {
                forbidden!("Not authorized to delete this post")
            }
            Some(_) => {}
        }

        let statement = Query::delete()
            .from_table(PostLike::Table)
            .and_where(Expr::col(PostLike::PostId).eq(post_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::delete()
            .from_table(PostTable::Table)
            .and_where(Expr::col(PostTable::Id).eq(post_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }
}
