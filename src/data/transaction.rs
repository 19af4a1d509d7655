//! Transaction data repository.
//!
//! The `transactions` table is an append-only audit log; the bot only ever inserts.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::{
    error::AppError,
    model::transaction::{CreateTransactionParam, Transaction},
};

/// Repository appending ledger audit records.
pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    /// Creates a new TransactionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a transaction record timestamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Acting user, kind and amount of the completed operation
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The stored record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, AppError> {
        let entity = entity::transaction::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            amount: ActiveValue::Set(param.amount),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Transaction::from_entity(entity)
    }
}
