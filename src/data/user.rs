//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing verified user records.
//! Balance changes are expressed as single conditional `UPDATE` statements so the
//! store applies them atomically; the repository never reads a balance and writes
//! it back.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::user::{ReverifyPolicy, User, VerifyUserParam},
};

/// Repository providing database operations for user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - The member never verified
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored record is malformed
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Creates or re-links a verified user.
    ///
    /// New users are inserted with the starting balance. For an existing user the
    /// Discord name, Roblox link, verification flag and timestamp are always
    /// replaced; the balance is only reset when the policy is `ResetBalance`.
    ///
    /// # Arguments
    /// - `param` - Verified identity, starting balance and re-verification policy
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user after the upsert
    /// - `Err(AppError::InternalErr(RobloxIdOutOfRange))` - Roblox ID exceeds the column range
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert_verified(&self, param: VerifyUserParam) -> Result<User, AppError> {
        let roblox_id =
            i64::try_from(param.roblox.id).map_err(|e| InternalError::RobloxIdOutOfRange {
                value: param.roblox.id,
                source: e,
            })?;

        let mut update_columns = vec![
            entity::user::Column::DiscordName,
            entity::user::Column::RobloxId,
            entity::user::Column::RobloxName,
            entity::user::Column::Verified,
            entity::user::Column::VerifiedAt,
        ];

        if param.policy == ReverifyPolicy::ResetBalance {
            update_columns.push(entity::user::Column::Balance);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            discord_name: ActiveValue::Set(param.discord_name),
            roblox_id: ActiveValue::Set(roblox_id),
            roblox_name: ActiveValue::Set(param.roblox.name),
            verified: ActiveValue::Set(true),
            verified_at: ActiveValue::Set(chrono::Utc::now()),
            balance: ActiveValue::Set(param.starting_balance),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Atomically adds `amount` to a user's balance.
    ///
    /// The update is skipped when it would overflow the stored balance.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user
    /// - `amount` - Positive amount to add
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - No such user, or the new balance would overflow
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn increment_balance(&self, discord_id: u64, amount: i64) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Balance,
                Expr::col(entity::user::Column::Balance).add(amount),
            )
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::user::Column::Balance.lte(i64::MAX - amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically subtracts `amount` if the user's balance covers it.
    ///
    /// The sufficiency check and the decrement are one statement, so concurrent
    /// withdrawals can never drive the balance below zero.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user
    /// - `amount` - Positive amount to subtract
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - No such user, or the balance is lower than `amount`
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn decrement_balance_if_sufficient(
        &self,
        discord_id: u64,
        amount: i64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Balance,
                Expr::col(entity::user::Column::Balance).sub(amount),
            )
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::user::Column::Balance.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
