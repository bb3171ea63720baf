use sea_query::{ColumnDef, Index, Table};

use crate::table::FoodLog;

operation!(
    CreateTable,
    Table::create()
        .table(FoodLog::Table)
        .col(
            ColumnDef::new(FoodLog::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(FoodLog::LogId).big_integer().not_null())
        .col(ColumnDef::new(FoodLog::UserId).string().not_null())
        .col(ColumnDef::new(FoodLog::FoodName).string().not_null())
        .col(ColumnDef::new(FoodLog::FoodId).big_integer().not_null().default(0))
        .col(ColumnDef::new(FoodLog::Calories).integer().not_null().default(0))
        .col(ColumnDef::new(FoodLog::Protein).integer().not_null().default(0))
        .col(ColumnDef::new(FoodLog::Carbs).integer().not_null().default(0))
        .col(ColumnDef::new(FoodLog::Fat).integer().not_null().default(0))
        .col(ColumnDef::new(FoodLog::MealTime).string().not_null().default(""))
        .col(ColumnDef::new(FoodLog::Date).string().not_null().default(""))
        .col(ColumnDef::new(FoodLog::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(FoodLog::Table).to_owned()
);

operation!(
    CreateUk1,
    Index::create()
        .name("uk_food_log_log_id")
        .table(FoodLog::Table)
        .unique()
        .col(FoodLog::LogId)
        .to_owned(),
    Index::drop()
        .name("uk_food_log_log_id")
        .table(FoodLog::Table)
        .to_owned()
);

operation!(
    CreateIdx1,
    Index::create()
        .name("idx_food_log_user_id")
        .table(FoodLog::Table)
        .col(FoodLog::UserId)
        .to_owned(),
    Index::drop()
        .name("idx_food_log_user_id")
        .table(FoodLog::Table)
        .to_owned()
);
