//! Transaction factory for creating audit records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a transaction record.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_id` - Discord ID of the acting user
/// - `kind` - `"deposit"` or `"withdraw"`
/// - `amount` - Amount moved
///
/// # Returns
/// - `Ok(entity::transaction::Model)` - Created record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_transaction(
    db: &DatabaseConnection,
    discord_id: &str,
    kind: &str,
    amount: i64,
) -> Result<entity::transaction::Model, DbErr> {
    entity::transaction::ActiveModel {
        discord_id: ActiveValue::Set(discord_id.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
