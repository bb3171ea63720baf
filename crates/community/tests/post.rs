use nutrimeal_community::{CreatePostInput, ImageInput, MAX_IMAGE_BYTES};
use nutrimeal_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_community::Command(state.clone());

    let err = cmd.create(helpers::post("  ", "u1")).await.unwrap_err();
    assert_eq!(err.to_string(), "Content is required");

    let err = cmd
        .create(CreatePostInput {
            author_picture: None,
            ..helpers::post("hello", "u1")
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Author information is incomplete");

    let err = cmd
        .create(CreatePostInput {
            image: Some(ImageInput {
                data: vec![0; MAX_IMAGE_BYTES + 1],
                content_type: Some("image/png".to_owned()),
            }),
            ..helpers::post("hello", "u1")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));
    assert_eq!(err.to_string(), "Image too large (max 5MB)");

    Ok(())
}

#[tokio::test]
async fn test_create_with_image() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_community::Command(state.clone());
    let query = nutrimeal_community::Query(state.clone());

    let post = cmd
        .create(CreatePostInput {
            image: Some(ImageInput {
                data: b"png!".to_vec(),
                content_type: Some("image/png".to_owned()),
            }),
            ..helpers::post("lunch", "u1")
        })
        .await?;

    let found = query.find(&post.id).await?.unwrap();
    assert_eq!(found.image.as_deref(), Some(&b"png!"[..]));

    let json = serde_json::to_value(&found)?;
    assert_eq!(json["image"], "cG5nIQ==");
    assert_eq!(json["imageType"], "image/png");
    assert_eq!(json["likes"], 0);
    assert_eq!(json["likedBy"], serde_json::json!([]));
    assert_eq!(json["author"]["_id"], "u1");
    assert!(json["createdAt"].is_string());

    let plain = cmd.create(helpers::post("no image", "u1")).await?;
    let json = serde_json::to_value(&plain)?;
    assert!(json.get("image").is_none());
    assert!(json.get("imageType").is_none());

    Ok(())
}

#[tokio::test]
async fn test_list_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_community::Command(state.clone());
    let query = nutrimeal_community::Query(state.clone());

    for i in 0..12 {
        cmd.create(helpers::post(&format!("post {i}"), "u1")).await?;
    }

    let first = query.list(None, None).await?;
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].content, "post 11");

    let second = query.list(Some(1), None).await?;
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].content, "post 0");

    Ok(())
}

#[tokio::test]
async fn test_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutrimeal_community::Command(state.clone());
    let query = nutrimeal_community::Query(state.clone());
    let post = cmd.create(helpers::post("hello", "u1")).await?;
    cmd.toggle_like(&post.id, "u2").await?;

    let err = cmd.delete(&post.id, "u2").await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    assert!(query.find(&post.id).await?.is_some());

    let err = cmd.delete(&post.id, "").await.unwrap_err();
    assert_eq!(err.to_string(), "User ID is required");

    cmd.delete(&post.id, "u1").await?;
    assert!(query.find(&post.id).await?.is_none());

    let err = cmd.delete(&post.id, "u1").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}
