use sea_query::{ColumnDef, Index, Table};

use crate::table::Recipe;

operation!(
    CreateTable,
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Recipe::RecipeId).big_integer().not_null())
        .col(ColumnDef::new(Recipe::Name).string().not_null())
        .col(
            ColumnDef::new(Recipe::Ingredients)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(Recipe::Instructions)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Recipe::Calories).integer().not_null().default(0))
        .col(ColumnDef::new(Recipe::Protein).integer().not_null().default(0))
        .col(ColumnDef::new(Recipe::Carbs).integer().not_null().default(0))
        .col(ColumnDef::new(Recipe::Fat).integer().not_null().default(0))
        .col(ColumnDef::new(Recipe::Category).string().not_null().default(""))
        .col(ColumnDef::new(Recipe::Tips).text().not_null().default(""))
        .col(
            ColumnDef::new(Recipe::PreparationTime)
                .string()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::Difficulty)
                .string()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::Allergens)
                .text()
                .not_null()
                .default("[]"),
        )
        .to_owned(),
    Table::drop().table(Recipe::Table).to_owned()
);

operation!(
    CreateUk1,
    Index::create()
        .name("uk_recipe_recipe_id")
        .table(Recipe::Table)
        .unique()
        .col(Recipe::RecipeId)
        .to_owned(),
    Index::drop()
        .name("uk_recipe_recipe_id")
        .table(Recipe::Table)
        .to_owned()
);

operation!(
    CreateIdx1,
    Index::create()
        .name("idx_recipe_category")
        .table(Recipe::Table)
        .col(Recipe::Category)
        .to_owned(),
    Index::drop()
        .name("idx_recipe_category")
        .table(Recipe::Table)
        .to_owned()
);
