use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000004_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(string(UserRoles::Username))
                    .col(string(UserRoles::Role))
                    // Composite key: one row per (username, role) pair.
                    .primary_key(
                        Index::create()
                            .col(UserRoles::Username)
                            .col(UserRoles::Role),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_username")
                            .from(UserRoles::Table, UserRoles::Username)
                            .to(Users::Table, Users::Username)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserRoles {
    Table,
    Username,
    Role,
}
