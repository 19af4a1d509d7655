use super::*;

/// Tests appending a deposit record.
///
/// Expected: Ok with the stored record matching the parameters
#[tokio::test]
async fn creates_deposit_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    let transaction = repo
        .create(CreateTransactionParam {
            discord_id: 123456789,
            kind: TransactionKind::Deposit,
            amount: 1500,
        })
        .await?;

    assert_eq!(transaction.discord_id, 123456789);
    assert_eq!(transaction.kind, TransactionKind::Deposit);
    assert_eq!(transaction.amount, 1500);

    let stored = entity::prelude::Transaction::find_by_id(transaction.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.kind, "deposit");
    assert_eq!(stored.discord_id, "123456789");

    Ok(())
}

/// Tests that records are appended rather than replaced.
///
/// Expected: Ok with one row per call
#[tokio::test]
async fn appends_separate_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    let first = repo
        .create(CreateTransactionParam {
            discord_id: 123456789,
            kind: TransactionKind::Deposit,
            amount: 1500,
        })
        .await?;
    let second = repo
        .create(CreateTransactionParam {
            discord_id: 123456789,
            kind: TransactionKind::Withdraw,
            amount: 500,
        })
        .await?;

    assert_ne!(first.id, second.id);
    let all = entity::prelude::Transaction::find().all(db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
