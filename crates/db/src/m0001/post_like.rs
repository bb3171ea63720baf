use sea_query::{ColumnDef, Index, Table};

use crate::table::PostLike;

operation!(
    CreateTable,
    Table::create()
        .table(PostLike::Table)
        .col(
            ColumnDef::new(PostLike::PostId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PostLike::UserId).string().not_null())
        .col(ColumnDef::new(PostLike::CreatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(PostLike::PostId)
                .col(PostLike::UserId),
        )
        .to_owned(),
    Table::drop().table(PostLike::Table).to_owned()
);
