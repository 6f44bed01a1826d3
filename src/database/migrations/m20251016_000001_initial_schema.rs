use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create tables in order of dependencies
        self.create_channels_table(manager).await?;
        self.create_posts_table(manager).await?;
        self.create_publications_table(manager).await?;

        self.create_indexes(manager).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Channels::Table).to_owned())
            .await?;

        Ok(())
    }
}

impl Migration {
    fn create_serial_id_column(&self, column: impl IntoIden) -> ColumnDef {
        let mut col = ColumnDef::new(column);
        col.integer().not_null().auto_increment().primary_key();
        col
    }

    async fn create_channels_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channels::Table)
                    .if_not_exists()
                    .col(self.create_serial_id_column(Channels::Id))
                    .col(ColumnDef::new(Channels::Title).string().not_null())
                    .col(ColumnDef::new(Channels::Username).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn create_posts_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(self.create_serial_id_column(Posts::Id))
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Text).text().not_null())
                    .col(ColumnDef::new(Posts::Image).string())
                    .to_owned(),
            )
            .await
    }

    async fn create_publications_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(self.create_serial_id_column(Publications::Id))
                    .col(ColumnDef::new(Publications::ChannelId).integer().not_null())
                    .col(ColumnDef::new(Publications::PostId).integer().not_null())
                    .col(
                        ColumnDef::new(Publications::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_channel_id")
                            .from(Publications::Table, Publications::ChannelId)
                            .to(Channels::Table, Channels::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_post_id")
                            .from(Publications::Table, Publications::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn create_indexes(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        // Composite uniqueness guards (title, username) against concurrent creates
        manager
            .create_index(
                Index::create()
                    .name("idx_channels_title_username")
                    .table(Channels::Table)
                    .col(Channels::Title)
                    .col(Channels::Username)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_publications_channel_id")
                    .table(Publications::Table)
                    .col(Publications::ChannelId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_publications_post_id")
                    .table(Publications::Table)
                    .col(Publications::PostId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

// Table identifiers
#[derive(DeriveIden)]
enum Channels {
    Table,
    Id,
    Title,
    Username,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Text,
    Image,
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    ChannelId,
    PostId,
    Date,
}
