//! Verification gate shared by the menu router and the ledger.

use sea_orm::ConnectionTrait;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        reply::{Notice, Reply},
        user::User,
    },
};

/// Loads the acting user if they completed verification.
///
/// # Returns
/// - `Ok(Some(User))` - Verified user record
/// - `Ok(None)` - No record, or the record is not verified
/// - `Err(AppError)` - Database error during lookup
pub async fn verified_user<C: ConnectionTrait>(
    db: &C,
    discord_id: u64,
) -> Result<Option<User>, AppError> {
    let user = UserRepository::new(db).find_by_discord_id(discord_id).await?;

    Ok(user.filter(|user| user.verified))
}

/// Rejection shown when an unverified member tries to use the ledger.
pub fn not_verified() -> Reply {
    Reply::Notice(Notice::error(
        "❌ Not verified",
        "You need to verify your Roblox account first!",
    ))
}
