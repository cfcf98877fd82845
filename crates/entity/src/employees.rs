//! Employees Entity
//!
//! Represents a store employee. `hourly_rate` is stored non-null and at or
//! above the legal wage floor; role-conditioned redaction happens only in
//! the projected view, never in the stored row. `leave_date` stays null
//! until the employee departs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:            i32,
    pub name:          String,
    pub hire_date:     chrono::NaiveDate,
    pub leave_date:    Option<chrono::NaiveDate>,
    pub phone_number:  String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub hourly_rate:   rust_decimal::Decimal,
    pub department_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Department,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Department.def() }
}

impl ActiveModelBehavior for ActiveModel {}
