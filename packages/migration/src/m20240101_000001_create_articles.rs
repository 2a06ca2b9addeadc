use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Articles {
    Table,
    Id,
    Title,
    Description,
    Content,
    Date,
    Author,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Articles::Title).text().not_null())
                    .col(ColumnDef::new(Articles::Description).text().not_null())
                    .col(ColumnDef::new(Articles::Content).text().not_null())
                    // ISO-8601 calendar date; lexical order == chronological order
                    .col(ColumnDef::new(Articles::Date).text().not_null())
                    .col(ColumnDef::new(Articles::Author).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_date")
                    .table(Articles::Table)
                    .col(Articles::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_articles_date")
                    .table(Articles::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Articles::Table).if_exists().to_owned())
            .await
    }
}
