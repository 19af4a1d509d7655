//! Service menu router.
//!
//! Maps a select-menu value from the service panel to the form it opens. Ledger
//! actions are gated on the member having a verified record.

use sea_orm::DatabaseConnection;

use crate::{
    error::AppError,
    model::{
        interaction::ServiceAction,
        reply::{Notice, Reply},
    },
    service::gate,
};

/// Service routing panel selections.
pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    /// Creates a new MenuService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Routes a menu selection.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the member who made the selection
    /// - `value` - Selected option value
    ///
    /// # Returns
    /// - `Ok(Reply::Form)` - Form to open for the selected action
    /// - `Ok(Reply::Notice)` - Ephemeral rejection (unverified member or unknown option)
    /// - `Err(AppError)` - Database error while checking verification
    pub async fn select(&self, discord_id: u64, value: &str) -> Result<Reply, AppError> {
        let Some(action) = ServiceAction::from_menu_value(value) else {
            tracing::warn!("Unknown service menu value '{}'", value);
            return Ok(Reply::Notice(Notice::error(
                "❌ Unknown option",
                "This option is not available anymore.",
            )));
        };

        if action.requires_verification()
            && gate::verified_user(self.db, discord_id).await?.is_none()
        {
            return Ok(gate::not_verified());
        }

        Ok(Reply::Form(action))
    }
}
