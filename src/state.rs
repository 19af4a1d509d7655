//! Shared state handed to the Discord event handler.
//!
//! Initialized once during startup. Every interaction borrows the database pool and
//! the identity lookup from here instead of reaching for globals.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{model::user::ReverifyPolicy, service::roblox::IdentityLookup};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; clones share the pool.
    pub db: DatabaseConnection,

    /// Resolves Roblox usernames during verification.
    pub identity_lookup: Arc<dyn IdentityLookup>,

    /// Shown in the service panel footer.
    pub service_name: String,

    pub reverify_policy: ReverifyPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity_lookup` - Roblox username resolver
    /// - `service_name` - Name shown in the panel footer
    /// - `reverify_policy` - What re-verification does to an existing balance
    pub fn new(
        db: DatabaseConnection,
        identity_lookup: Arc<dyn IdentityLookup>,
        service_name: String,
        reverify_policy: ReverifyPolicy,
    ) -> Self {
        Self {
            db,
            identity_lookup,
            service_name,
            reverify_policy,
        }
    }
}
