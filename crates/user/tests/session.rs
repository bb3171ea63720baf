use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_session_lifecycle() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let cmd = nutrimeal_user::Command(state.clone());
    let query = nutrimeal_user::Query(state.clone());

    let session = cmd.create_session(&user_id, 3600, None).await?;
    let found = query.find_session(&session.id).await?.unwrap();
    assert_eq!(found.user_id, user_id);

    let replaced = cmd
        .create_session(&user_id, 3600, Some(session.id.as_str()))
        .await?;
    assert!(query.find_session(&session.id).await?.is_none());
    assert!(query.find_session(&replaced.id).await?.is_some());

    assert!(cmd.destroy_session(&replaced.id).await?);
    assert!(query.find_session(&replaced.id).await?.is_none());
    assert!(!cmd.destroy_session(&replaced.id).await?);

    Ok(())
}

#[tokio::test]
async fn test_expired_session_ignored_and_purged() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let cmd = nutrimeal_user::Command(state.clone());
    let query = nutrimeal_user::Query(state.clone());

    let expired = cmd.create_session(&user_id, -10, None).await?;
    assert!(query.find_session(&expired.id).await?.is_none());

    let purged = cmd.purge_expired_sessions(nutrimeal_shared::now()).await?;
    assert_eq!(purged, 1);

    Ok(())
}
