use sea_query::{ColumnDef, Index, Table};

use crate::table::User;

operation!(
    CreateTable,
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(User::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(User::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(User::Name).string().not_null().default(""))
        .col(ColumnDef::new(User::Picture).string().not_null().default(""))
        .col(ColumnDef::new(User::Height).double().not_null().default(0.0))
        .col(ColumnDef::new(User::Birthday).string().null())
        .col(ColumnDef::new(User::DeleteHash).string().null())
        .col(ColumnDef::new(User::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(User::UpdatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(User::Table).to_owned()
);

operation!(
    CreateUk1,
    Index::create()
        .name("uk_user_email")
        .table(User::Table)
        .unique()
        .col(User::Email)
        .to_owned(),
    Index::drop()
        .name("uk_user_email")
        .table(User::Table)
        .to_owned()
);
