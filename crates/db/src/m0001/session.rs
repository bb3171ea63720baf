use sea_query::{ColumnDef, Index, Table};

use crate::table::Session;

operation!(
    CreateTable,
    Table::create()
        .table(Session::Table)
        .col(
            ColumnDef::new(Session::Id)
                .string()
                .not_null()
                .string_len(64)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Session::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Session::ExpiresAt).big_integer().not_null())
        .col(ColumnDef::new(Session::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(Session::Table).to_owned()
);

operation!(
    CreateIdx1,
    Index::create()
        .name("idx_session_user_id")
        .table(Session::Table)
        .col(Session::UserId)
        .to_owned(),
    Index::drop()
        .name("idx_session_user_id")
        .table(Session::Table)
        .to_owned()
);
