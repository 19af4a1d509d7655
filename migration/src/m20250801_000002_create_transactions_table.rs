use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(string(Transactions::DiscordId))
                    .col(string(Transactions::Kind))
                    .col(big_integer(Transactions::Amount))
                    .col(timestamp(Transactions::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Audit lookups are always per member
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_discord_id")
                    .table(Transactions::Table)
                    .col(Transactions::DiscordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_transactions_discord_id")
                    .table(Transactions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    DiscordId,
    Kind,
    Amount,
    CreatedAt,
}
