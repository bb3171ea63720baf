use sea_query::{ColumnDef, Index, Table};

use crate::table::Post;

operation!(
    CreateTable,
    Table::create()
        .table(Post::Table)
        .col(
            ColumnDef::new(Post::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Post::Content).text().not_null())
        .col(ColumnDef::new(Post::Image).blob().null())
        .col(ColumnDef::new(Post::ImageType).string().null())
        .col(ColumnDef::new(Post::AuthorId).string().not_null())
        .col(ColumnDef::new(Post::AuthorName).string().not_null())
        .col(ColumnDef::new(Post::AuthorPicture).string().not_null())
        .col(ColumnDef::new(Post::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(Post::Table).to_owned()
);

operation!(
    CreateIdx1,
    Index::create()
        .name("idx_post_created_at")
        .table(Post::Table)
        .col(Post::CreatedAt)
        .to_owned(),
    Index::drop()
        .name("idx_post_created_at")
        .table(Post::Table)
        .to_owned()
);
