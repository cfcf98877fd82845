use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_create_departments_table::Departments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(pk_auto(Vendors::Id))
                    .col(string(Vendors::VendorName))
                    .col(string(Vendors::Contact))
                    .col(string(Vendors::Address))
                    .col(string_len(Vendors::PhoneNumber, 13))
                    .col(integer(Vendors::DepartmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendors_department_id")
                            .from(Vendors::Table, Vendors::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendors_department_id")
                    .table(Vendors::Table)
                    .col(Vendors::DepartmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vendors {
    Table,
    Id,
    VendorName,
    Contact,
    Address,
    PhoneNumber,
    DepartmentId,
}
