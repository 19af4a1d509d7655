use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    model::roblox::{LookupOutcome, RobloxUser},
    service::roblox::IdentityLookup,
};


/// Identity lookup returning a fixed outcome and counting calls.
struct FakeLookup {
    outcome: LookupOutcome,
    calls: AtomicUsize,
}

impl FakeLookup {
    fn new(outcome: LookupOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn found(id: u64, name: &str) -> Self {
        Self::new(LookupOutcome::Found(RobloxUser {
            id,
            name: name.to_string(),
        }))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityLookup for FakeLookup {
    async fn lookup(&self, _username: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Reads the stored balance of a user straight from the table.
async fn stored_balance(db: &DatabaseConnection, discord_id: &str) -> Result<Option<i64>, DbErr> {
    let user = entity::prelude::User::find_by_id(discord_id.to_string())
        .one(db)
        .await?;

    Ok(user.map(|user| user.balance))
}

/// Reads all transaction records of a user straight from the table.
async fn stored_transactions(
    db: &DatabaseConnection,
    discord_id: &str,
) -> Result<Vec<entity::transaction::Model>, DbErr> {
    entity::prelude::Transaction::find()
        .filter(entity::transaction::Column::DiscordId.eq(discord_id))
        .all(db)
        .await
}
