use nutrimeal_db::Sequence;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_next_id_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    for sequence in [Sequence::FoodLog, Sequence::MealPlan, Sequence::Recipe] {
        assert_eq!(sequence.next_id(&pool).await?, 1);
    }

    Ok(())
}

#[tokio::test]
async fn test_next_id_after_existing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    for (key, log_id) in [("a", 1), ("b", 2), ("c", 3)] {
        helpers::insert_food_log(&pool, key, log_id).await?;
    }

    assert_eq!(Sequence::FoodLog.next_id(&pool).await?, 4);
    assert_eq!(Sequence::MealPlan.next_id(&pool).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_next_id_ignores_storage_key_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    // storage keys sort opposite to logical ids
    helpers::insert_recipe(&pool, "z", 7).await?;
    helpers::insert_recipe(&pool, "a", 12).await?;
    helpers::insert_recipe(&pool, "m", 3).await?;

    helpers::insert_food_log(&pool, "z", 7).await?;
    helpers::insert_food_log(&pool, "a", 12).await?;

    assert_eq!(Sequence::Recipe.next_id(&pool).await?, 13);
    assert_eq!(Sequence::FoodLog.next_id(&pool).await?, 13);

    Ok(())
}

#[tokio::test]
async fn test_next_id_expr_inside_insert() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    helpers::insert_recipe(&pool, "a", 41).await?;

    let statement = sea_query::Query::insert()
        .into_table(nutrimeal_db::table::Recipe::Table)
        .columns([
            nutrimeal_db::table::Recipe::Id,
            nutrimeal_db::table::Recipe::RecipeId,
            nutrimeal_db::table::Recipe::Name,
        ])
        .values_panic(["b".into(), Sequence::Recipe.next_id_expr(), "soup".into()])
        .returning_col(nutrimeal_db::table::Recipe::RecipeId)
        .to_owned();
    let sql = statement.to_string(sea_query::SqliteQueryBuilder);
    let recipe_id: i64 = sqlx::query_scalar(&sql).fetch_one(&pool).await?;

    assert_eq!(recipe_id, 42);
    assert_eq!(Sequence::Recipe.next_id(&pool).await?, 43);

    Ok(())
}

#[tokio::test]
async fn test_logical_id_unique() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    helpers::insert_food_log(&pool, "a", 1).await?;
    let err = helpers::insert_food_log(&pool, "b", 1).await;

    assert!(err.is_err());

    Ok(())
}
