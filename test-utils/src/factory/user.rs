//! User factory for creating test user entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating verified test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .roblox(156, "Builderman")
///     .balance(6500)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    builder: fixture::user::UserEntityBuilder,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented number
    /// - discord_name: `"User {id}"`
    /// - roblox: fixture defaults
    /// - balance: `5000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            builder: fixture::user::entity_builder()
                .discord_id(id.to_string())
                .discord_name(format!("User {}", id)),
        }
    }

    /// Sets the Discord ID for the user.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.builder = self.builder.discord_id(discord_id);
        self
    }

    /// Sets the linked Roblox account.
    pub fn roblox(mut self, roblox_id: i64, roblox_name: impl Into<String>) -> Self {
        self.builder = self.builder.roblox(roblox_id, roblox_name);
        self
    }

    /// Sets the verification flag.
    pub fn verified(mut self, verified: bool) -> Self {
        self.builder = self.builder.verified(verified);
        self
    }

    /// Sets the balance.
    pub fn balance(mut self, balance: i64) -> Self {
        self.builder = self.builder.balance(balance);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let model = self.builder.build();
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(model.discord_id),
            discord_name: ActiveValue::Set(model.discord_name),
            roblox_id: ActiveValue::Set(model.roblox_id),
            roblox_name: ActiveValue::Set(model.roblox_name),
            verified: ActiveValue::Set(model.verified),
            verified_at: ActiveValue::Set(model.verified_at),
            balance: ActiveValue::Set(model.balance),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
