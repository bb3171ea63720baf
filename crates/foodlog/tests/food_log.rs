use nutrimeal_foodlog::CreateFoodLogInput;
use nutrimeal_shared::Error;
use temp_dir::TempDir;

mod helpers;

fn input(user_id: &str, food_name: &str) -> CreateFoodLogInput {
    CreateFoodLogInput {
        user_id: user_id.to_owned(),
        food_name: food_name.to_owned(),
        food_id: 7,
        calories: 95,
        protein: 1,
        carbs: 25,
        fat: 0,
        meal_time: "breakfast".to_owned(),
        date: "2024-05-01".to_owned(),
    }
}

#[tokio::test]
async fn test_create_sequential_ids() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_foodlog::Command(state.clone());

    let ids = [
        cmd.create(input("u1", "apple")).await?.log_id,
        cmd.create(input("u2", "banana")).await?.log_id,
        cmd.create(input("u1", "pear")).await?.log_id,
    ];

    assert_eq!(ids, [1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_creates_never_share_an_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let mut handles = vec![];
    for i in 0..10 {
        let cmd = nutrimeal_foodlog::Command(state.clone());
        handles.push(tokio::spawn(async move {
            cmd.create(input("u1", &format!("food {i}"))).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await??.log_id);
    }
    ids.sort();

    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());

    Ok(())
}

#[tokio::test]
async fn test_by_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_foodlog::Command(state.clone());
    let query = nutrimeal_foodlog::Query(state.clone());

    cmd.create(input("u1", "apple")).await?;
    cmd.create(input("u2", "banana")).await?;
    cmd.create(input("u1", "pear")).await?;

    let logs = query.by_user("u1").await?;
    let names: Vec<&str> = logs.iter().map(|l| l.food_name.as_str()).collect();
    assert_eq!(names, vec!["apple", "pear"]);
    assert!(query.by_user("u3").await?.is_empty());

    let json = serde_json::to_value(&logs[1])?;
    assert_eq!(json["id"], 3);
    assert_eq!(json["food_name"], "pear");
    assert!(json["created_at"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_create_requires_food_name() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_foodlog::Command(state.clone());

    let err = cmd.create(input("u1", "")).await.unwrap_err();

    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}

#[tokio::test]
async fn test_next_id_follows_log_id_not_storage_key() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_foodlog::Command(state.clone());

    // storage keys sort opposite to logical ids
    for (id, log_id) in [("z", 7), ("a", 12), ("m", 3)] {
        sqlx::query(
            "INSERT INTO food_log (id, log_id, user_id, food_name, created_at) VALUES (?, ?, 'u1', 'apple', 0)",
        )
        .bind(id)
        .bind(log_id)
        .execute(&state.write_db)
        .await?;
    }

    let log = cmd.create(input("u1", "banana")).await?;
    assert_eq!(log.log_id, 13);

    Ok(())
}
