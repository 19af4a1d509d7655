//! Roblox account verification.
//!
//! Resolves the submitted username and links the Roblox account to the member's
//! Discord account. New members receive the starting balance.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        interaction::Actor,
        reply::{Notice, Reply},
        roblox::LookupOutcome,
        user::{ReverifyPolicy, VerifyUserParam, STARTING_BALANCE},
    },
    service::roblox::IdentityLookup,
    util::format::format_currency,
};

/// Service handling verification form submissions.
pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    identity_lookup: &'a dyn IdentityLookup,
    policy: ReverifyPolicy,
}

impl<'a> VerificationService<'a> {
    /// Creates a new VerificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `identity_lookup` - Roblox username resolver
    /// - `policy` - What re-verification does to an existing balance
    pub fn new(
        db: &'a DatabaseConnection,
        identity_lookup: &'a dyn IdentityLookup,
        policy: ReverifyPolicy,
    ) -> Self {
        Self {
            db,
            identity_lookup,
            policy,
        }
    }

    /// Verifies the member as the owner of the submitted Roblox username.
    ///
    /// # Arguments
    /// - `actor` - Member who submitted the form
    /// - `username` - Submitted Roblox username
    ///
    /// # Returns
    /// - `Ok(Reply::Notice)` - Public confirmation, or an ephemeral rejection when the
    ///   username is unknown or Roblox is unreachable
    /// - `Err(AppError)` - Database error while storing the record
    pub async fn verify(&self, actor: Actor, username: &str) -> Result<Reply, AppError> {
        let roblox = match self.identity_lookup.lookup(username).await {
            LookupOutcome::Found(roblox) => roblox,
            LookupOutcome::NotFound => {
                return Ok(Reply::Notice(Notice::error(
                    "❌ User not found",
                    format!(
                        "The Roblox user `{}` could not be found!",
                        username.trim()
                    ),
                )));
            }
            LookupOutcome::Unavailable(_) => {
                return Ok(Reply::Notice(Notice::error(
                    "❌ Roblox unavailable",
                    "Roblox could not be reached right now. Please try again later.",
                )));
            }
        };

        let thumbnail = roblox.headshot_url();
        let user = UserRepository::new(self.db)
            .upsert_verified(VerifyUserParam {
                discord_id: actor.discord_id,
                discord_name: actor.name,
                roblox,
                starting_balance: STARTING_BALANCE,
                policy: self.policy,
            })
            .await?;

        tracing::info!(
            "Verified {} ({}) as Roblox user {} ({})",
            user.discord_name,
            user.discord_id,
            user.roblox_name,
            user.roblox_id
        );

        Ok(Reply::Notice(
            Notice::success(
                "✅ Successfully verified!",
                format!(
                    "**Discord:** <@{}>\n**Roblox:** {}",
                    user.discord_id, user.roblox_name
                ),
            )
            .public()
            .thumbnail(thumbnail)
            .field("💰 Balance", format_currency(user.balance), true)
            .field(
                "📅 Verified at",
                user.verified_at.format("%d.%m.%Y %H:%M").to_string(),
                true,
            ),
        ))
    }
}
