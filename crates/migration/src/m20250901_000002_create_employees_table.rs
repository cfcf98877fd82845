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
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string(Employees::Name))
                    .col(date(Employees::HireDate))
                    .col(date_null(Employees::LeaveDate))
                    .col(string_len(Employees::PhoneNumber, 13))
                    .col(decimal_len(Employees::HourlyRate, 10, 2))
                    .col(integer(Employees::DepartmentId))
                    // Wage floor is also enforced in the repository; the check
                    // keeps out-of-band writes honest.
                    .check(Expr::col(Employees::HourlyRate).gte(13.00))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
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
                    .name("idx_employees_department_id")
                    .table(Employees::Table)
                    .col(Employees::DepartmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    HireDate,
    LeaveDate,
    PhoneNumber,
    HourlyRate,
    DepartmentId,
}
