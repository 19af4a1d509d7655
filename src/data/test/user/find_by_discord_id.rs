use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .roblox(156, "Builderman")
        .balance(6500)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.roblox_id, 156);
    assert_eq!(user.roblox_name, "Builderman");
    assert_eq!(user.balance, 6500);
    assert!(user.verified);

    Ok(())
}

/// Tests querying for a member who never verified.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_discord_id(999999999).await?;

    assert!(result.is_none());

    Ok(())
}
