//! Users Entity
//!
//! Represents a user account. The username is the primary identity (a
//! string key, never server-generated). `password_hash` holds only the
//! opaque value produced by the credential hasher.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username:      String,
    pub password_hash: String,
    pub phone_number:  String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserRoles.def() }
}

impl ActiveModelBehavior for ActiveModel {}
