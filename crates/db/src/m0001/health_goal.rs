use sea_query::{ColumnDef, Index, Table};

use crate::table::HealthGoal;

operation!(
    CreateTable,
    Table::create()
        .table(HealthGoal::Table)
        .col(
            ColumnDef::new(HealthGoal::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(HealthGoal::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(HealthGoal::TargetWeight)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(HealthGoal::CurrentWeight)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(HealthGoal::ActivityLevel)
                .string()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(HealthGoal::DietaryPreferences)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(HealthGoal::WeeklyGoal)
                .string()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(HealthGoal::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(HealthGoal::UpdatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(HealthGoal::Table).to_owned()
);

operation!(
    CreateIdx1,
    Index::create()
        .name("idx_health_goal_user_id")
        .table(HealthGoal::Table)
        .col(HealthGoal::UserId)
        .col(HealthGoal::CreatedAt)
        .to_owned(),
    Index::drop()
        .name("idx_health_goal_user_id")
        .table(HealthGoal::Table)
        .to_owned()
);
