//! Ledger transaction models.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Direction of a ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// Value stored in the `kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(InternalError::UnknownTransactionKind(other.to_string())),
        }
    }
}

/// Audit record of a completed deposit or withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    /// Discord ID of the acting user
    pub discord_id: u64,
    pub kind: TransactionKind,
    /// Strictly positive amount moved by the operation
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Converts an entity model to a transaction domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The converted transaction
    /// - `Err(AppError::InternalErr)` - Stored Discord ID or kind is malformed
    pub fn from_entity(entity: entity::transaction::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;
        let kind = entity.kind.parse::<TransactionKind>()?;

        Ok(Self {
            id: entity.id,
            discord_id,
            kind,
            amount: entity.amount,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending a transaction record.
#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub discord_id: u64,
    pub kind: TransactionKind,
    pub amount: i64,
}
