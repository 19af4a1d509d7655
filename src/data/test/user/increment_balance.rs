use super::*;

/// Tests adding to an existing balance.
///
/// Expected: Ok(true) and balance increased by the amount
#[tokio::test]
async fn adds_amount_to_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .balance(5000)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let applied = repo.increment_balance(123456789, 1500).await?;

    assert!(applied);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, 6500);

    Ok(())
}

/// Tests incrementing the balance of a member without a record.
///
/// Expected: Ok(false) and no record created
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let applied = repo.increment_balance(123456789, 1500).await?;

    assert!(!applied);
    assert!(repo.find_by_discord_id(123456789).await?.is_none());

    Ok(())
}

/// Tests that an increment which would overflow the balance is skipped.
///
/// Expected: Ok(false) and balance unchanged
#[tokio::test]
async fn skips_increment_that_would_overflow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .balance(i64::MAX - 10)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let applied = repo.increment_balance(123456789, 11).await?;

    assert!(!applied);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, i64::MAX - 10);

    Ok(())
}
