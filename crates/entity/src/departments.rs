//! Departments Entity
//!
//! Represents an organizational department. Employees and vendors reference
//! a department and are owned by it: deleting a department removes them
//! first (the repository layer sequences this, not the storage engine).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:   i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employees::Entity")]
    Employees,
    #[sea_orm(has_many = "super::vendors::Entity")]
    Vendors,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employees.def() }
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vendors.def() }
}

impl ActiveModelBehavior for ActiveModel {}
