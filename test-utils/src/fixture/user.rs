//! User fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::user;

/// Default Discord ID.
pub const DEFAULT_DISCORD_ID: &str = "123456789";

/// Default Discord username.
pub const DEFAULT_DISCORD_NAME: &str = "TestUser";

/// Default linked Roblox account ID.
pub const DEFAULT_ROBLOX_ID: i64 = 156;

/// Default linked Roblox account name.
pub const DEFAULT_ROBLOX_NAME: &str = "Builderman";

/// Default balance, matching the starting grant.
pub const DEFAULT_BALANCE: i64 = 5000;

fn default_verified_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a verified user entity model with default values.
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Returns
/// - `UserEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    discord_id: String,
    discord_name: String,
    roblox_id: i64,
    roblox_name: String,
    verified: bool,
    verified_at: DateTime<Utc>,
    balance: i64,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            discord_id: DEFAULT_DISCORD_ID.to_string(),
            discord_name: DEFAULT_DISCORD_NAME.to_string(),
            roblox_id: DEFAULT_ROBLOX_ID,
            roblox_name: DEFAULT_ROBLOX_NAME.to_string(),
            verified: true,
            verified_at: default_verified_at(),
            balance: DEFAULT_BALANCE,
        }
    }
}

impl UserEntityBuilder {
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn discord_name(mut self, discord_name: impl Into<String>) -> Self {
        self.discord_name = discord_name.into();
        self
    }

    pub fn roblox(mut self, roblox_id: i64, roblox_name: impl Into<String>) -> Self {
        self.roblox_id = roblox_id;
        self.roblox_name = roblox_name.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            discord_id: self.discord_id,
            discord_name: self.discord_name,
            roblox_id: self.roblox_id,
            roblox_name: self.roblox_name,
            verified: self.verified,
            verified_at: self.verified_at,
            balance: self.balance,
        }
    }
}
