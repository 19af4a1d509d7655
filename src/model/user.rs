//! User domain models and parameters.
//!
//! A user record exists only once a member has linked a Roblox account, so every
//! stored user is verified. The balance is kept in whole currency units.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::roblox::RobloxUser, util::parse::parse_u64_from_string};

/// Balance granted to a member on first verification.
pub const STARTING_BALANCE: i64 = 5000;

/// Member with a linked Roblox account and a currency balance.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username at the time of the latest verification
    pub discord_name: String,
    /// Linked Roblox account ID
    pub roblox_id: i64,
    /// Linked Roblox account name
    pub roblox_name: String,
    /// Whether the user completed verification
    pub verified: bool,
    /// Time of the latest verification
    pub verified_at: DateTime<Utc>,
    /// Current balance in whole currency units
    pub balance: i64,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored user
    ///   Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            discord_name: entity.discord_name,
            roblox_id: entity.roblox_id,
            roblox_name: entity.roblox_name,
            verified: entity.verified,
            verified_at: entity.verified_at,
            balance: entity.balance,
        })
    }
}

/// What happens to an existing balance when a member verifies again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReverifyPolicy {
    /// Only the Roblox link and verification time change.
    #[default]
    PreserveBalance,
    /// The whole record is replaced, resetting the balance to the starting grant.
    ResetBalance,
}

/// Parameters for creating or re-linking a verified user.
#[derive(Debug, Clone)]
pub struct VerifyUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username of the user
    pub discord_name: String,
    /// Roblox account resolved from the submitted username
    pub roblox: RobloxUser,
    /// Balance assigned to new records (and to existing ones under `ResetBalance`)
    pub starting_balance: i64,
    /// Behavior for users who already have a record
    pub policy: ReverifyPolicy,
}
