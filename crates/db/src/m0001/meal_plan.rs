use sea_query::{ColumnDef, Index, Table};

use crate::table::MealPlan;

operation!(
    CreateTable,
    Table::create()
        .table(MealPlan::Table)
        .col(
            ColumnDef::new(MealPlan::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(MealPlan::PlanId).big_integer().not_null())
        .col(ColumnDef::new(MealPlan::UserId).string().not_null())
        .col(ColumnDef::new(MealPlan::Date).string().not_null())
        .col(ColumnDef::new(MealPlan::Breakfast).string().not_null())
        .col(ColumnDef::new(MealPlan::Lunch).string().not_null())
        .col(ColumnDef::new(MealPlan::Dinner).string().not_null())
        .col(
            ColumnDef::new(MealPlan::BreakfastRecipeId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MealPlan::LunchRecipeId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MealPlan::DinnerRecipeId)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(MealPlan::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(MealPlan::Table).to_owned()
);

operation!(
    CreateUk1,
    Index::create()
        .name("uk_meal_plan_plan_id")
        .table(MealPlan::Table)
        .unique()
        .col(MealPlan::PlanId)
        .to_owned(),
    Index::drop()
        .name("uk_meal_plan_plan_id")
        .table(MealPlan::Table)
        .to_owned()
);

operation!(
    CreateUk2,
    Index::create()
        .name("uk_meal_plan_user_id_date")
        .table(MealPlan::Table)
        .unique()
        .col(MealPlan::UserId)
        .col(MealPlan::Date)
        .to_owned(),
    Index::drop()
        .name("uk_meal_plan_user_id_date")
        .table(MealPlan::Table)
        .to_owned()
);
