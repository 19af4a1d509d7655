use super::*;

/// Tests withdrawing less than the balance.
///
/// Expected: Ok(true) and balance reduced by the amount
#[tokio::test]
async fn subtracts_amount_when_covered() -> Result<(), AppError> {
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
    let applied = repo.decrement_balance_if_sufficient(123456789, 1500).await?;

    assert!(applied);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, 5000);

    Ok(())
}

/// Tests withdrawing exactly the full balance.
///
/// Expected: Ok(true) and balance of zero
#[tokio::test]
async fn allows_withdrawing_entire_balance() -> Result<(), AppError> {
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
    let applied = repo.decrement_balance_if_sufficient(123456789, 6500).await?;

    assert!(applied);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, 0);

    Ok(())
}

/// Tests withdrawing more than the balance.
///
/// Expected: Ok(false) and balance unchanged
#[tokio::test]
async fn refuses_when_balance_is_insufficient() -> Result<(), AppError> {
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
    let applied = repo.decrement_balance_if_sufficient(123456789, 9000).await?;

    assert!(!applied);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, 6500);

    Ok(())
}

/// Tests that repeated withdrawals stop at zero.
///
/// Two withdrawals that each fit the starting balance but not together must not
/// both succeed.
///
/// Expected: first Ok(true), second Ok(false), balance never negative
#[tokio::test]
async fn second_withdrawal_cannot_overdraw() -> Result<(), AppError> {
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
    let first = repo.decrement_balance_if_sufficient(123456789, 3000).await?;
    let second = repo.decrement_balance_if_sufficient(123456789, 3000).await?;

    assert!(first);
    assert!(!second);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.balance, 2000);

    Ok(())
}
