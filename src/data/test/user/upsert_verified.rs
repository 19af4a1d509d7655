use super::*;

/// Tests creating a user on first verification.
///
/// Expected: Ok with a verified user holding the starting balance
#[tokio::test]
async fn creates_verified_user_with_starting_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_verified(verify_param(123456789, 156, "Builderman"))
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.discord_name, "member");
    assert_eq!(user.roblox_id, 156);
    assert_eq!(user.roblox_name, "Builderman");
    assert_eq!(user.balance, STARTING_BALANCE);
    assert!(user.verified);

    Ok(())
}

/// Tests re-verification under the default policy.
///
/// The Roblox link is replaced while the accumulated balance is kept.
///
/// Expected: Ok with new Roblox identity and unchanged balance
#[tokio::test]
async fn preserves_balance_on_reverification() -> Result<(), AppError> {
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
    let user = repo
        .upsert_verified(verify_param(123456789, 261, "Shedletsky"))
        .await?;

    assert_eq!(user.roblox_id, 261);
    assert_eq!(user.roblox_name, "Shedletsky");
    assert_eq!(user.balance, 6500);

    Ok(())
}

/// Tests re-verification under the reset policy.
///
/// Expected: Ok with the balance reset to the starting grant
#[tokio::test]
async fn resets_balance_on_reverification_when_configured() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .balance(6500)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_verified(VerifyUserParam {
            policy: ReverifyPolicy::ResetBalance,
            ..verify_param(123456789, 156, "Builderman")
        })
        .await?;

    assert_eq!(user.balance, STARTING_BALANCE);
    assert_eq!(user.roblox_name, "Builderman");

    Ok(())
}

/// Tests that upserting one user leaves other users untouched.
///
/// Expected: Ok with the other user's record unchanged
#[tokio::test]
async fn does_not_affect_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111")
        .balance(42)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.upsert_verified(VerifyUserParam {
        policy: ReverifyPolicy::ResetBalance,
        ..verify_param(222, 156, "Builderman")
    })
    .await?;

    let other = repo.find_by_discord_id(111).await?.unwrap();
    assert_eq!(other.balance, 42);

    Ok(())
}

/// Tests rejecting a Roblox ID outside the storable range.
///
/// Expected: Err(AppError::InternalErr) and no record written
#[tokio::test]
async fn rejects_out_of_range_roblox_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert_verified(verify_param(123456789, u64::MAX, "Overflow"))
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));
    assert!(repo.find_by_discord_id(123456789).await?.is_none());

    Ok(())
}
