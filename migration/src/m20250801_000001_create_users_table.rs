use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(string(Users::DiscordId).primary_key())
                    .col(string(Users::DiscordName))
                    .col(big_integer(Users::RobloxId))
                    .col(string(Users::RobloxName))
                    .col(boolean(Users::Verified).default(false))
                    .col(timestamp(Users::VerifiedAt))
                    .col(big_integer(Users::Balance).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    DiscordId,
    DiscordName,
    RobloxId,
    RobloxName,
    Verified,
    VerifiedAt,
    Balance,
}
