//! Deposits and withdrawals.
//!
//! Each operation runs in one database transaction: the balance change and its
//! audit record are committed together or not at all. Balances are only changed
//! through the repository's atomic update statements.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{transaction::TransactionRepository, user::UserRepository},
    error::AppError,
    model::{
        reply::{Notice, Reply},
        transaction::{CreateTransactionParam, TransactionKind},
    },
    service::gate,
    util::{format::format_currency, parse::parse_amount},
};

/// Service handling deposit and withdraw form submissions.
pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    /// Creates a new LedgerService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the submitted amount to the member's balance.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the member
    /// - `raw_amount` - Text submitted in the amount input
    ///
    /// # Returns
    /// - `Ok(Reply::Notice)` - Ephemeral confirmation or rejection
    /// - `Err(AppError)` - Database error; nothing was committed
    pub async fn deposit(&self, discord_id: u64, raw_amount: &str) -> Result<Reply, AppError> {
        let Some(amount) = parse_amount(raw_amount) else {
            return Ok(invalid_amount());
        };

        let txn = self.db.begin().await?;

        if gate::verified_user(&txn, discord_id).await?.is_none() {
            txn.rollback().await?;
            return Ok(gate::not_verified());
        }

        // Only fails if the balance would overflow
        if !UserRepository::new(&txn)
            .increment_balance(discord_id, amount)
            .await?
        {
            txn.rollback().await?;
            return Ok(invalid_amount());
        }

        let balance = record_and_commit(txn, discord_id, TransactionKind::Deposit, amount).await?;

        Ok(Reply::Notice(
            Notice::success(
                "✅ Deposit successful",
                format!("**{}** has been deposited!", format_currency(amount)),
            )
            .field("💰 New balance", format_currency(balance), true),
        ))
    }

    /// Takes the submitted amount from the member's balance if it is covered.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the member
    /// - `raw_amount` - Text submitted in the amount input
    ///
    /// # Returns
    /// - `Ok(Reply::Notice)` - Ephemeral confirmation or rejection
    /// - `Err(AppError)` - Database error; nothing was committed
    pub async fn withdraw(&self, discord_id: u64, raw_amount: &str) -> Result<Reply, AppError> {
        let Some(amount) = parse_amount(raw_amount) else {
            return Ok(invalid_amount());
        };

        let txn = self.db.begin().await?;

        if gate::verified_user(&txn, discord_id).await?.is_none() {
            txn.rollback().await?;
            return Ok(gate::not_verified());
        }

        let users = UserRepository::new(&txn);
        if !users
            .decrement_balance_if_sufficient(discord_id, amount)
            .await?
        {
            let balance = users
                .find_by_discord_id(discord_id)
                .await?
                .map_or(0, |user| user.balance);
            txn.rollback().await?;

            return Ok(Reply::Notice(Notice::error(
                "❌ Insufficient balance",
                format!(
                    "You only have **{}** in your account!",
                    format_currency(balance)
                ),
            )));
        }

        let balance = record_and_commit(txn, discord_id, TransactionKind::Withdraw, amount).await?;

        Ok(Reply::Notice(
            Notice::success(
                "✅ Withdrawal successful",
                format!("**{}** has been withdrawn!", format_currency(amount)),
            )
            .field("💰 New balance", format_currency(balance), true),
        ))
    }
}

/// Appends the audit record, reads the resulting balance and commits.
async fn record_and_commit(
    txn: DatabaseTransaction,
    discord_id: u64,
    kind: TransactionKind,
    amount: i64,
) -> Result<i64, AppError> {
    TransactionRepository::new(&txn)
        .create(CreateTransactionParam {
            discord_id,
            kind,
            amount,
        })
        .await?;

    let balance = UserRepository::new(&txn)
        .find_by_discord_id(discord_id)
        .await?
        .map_or(0, |user| user.balance);

    txn.commit().await?;

    tracing::info!(
        "{} of {} by {} committed, balance now {}",
        kind,
        amount,
        discord_id,
        balance
    );

    Ok(balance)
}

fn invalid_amount() -> Reply {
    Reply::Notice(Notice::error(
        "❌ Invalid amount",
        "Please enter a valid whole number greater than zero!",
    ))
}
