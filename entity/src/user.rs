use sea_orm::entity::prelude::*;

/// A guild member who linked a Roblox account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub discord_name: String,
    pub roblox_id: i64,
    pub roblox_name: String,
    pub verified: bool,
    pub verified_at: DateTimeUtc,
    pub balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
