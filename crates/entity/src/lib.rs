//! Entity definitions for the Anvil store backend
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! One module per table; relations are declared on the owning side.

pub mod departments;
pub use departments::Entity as Departments;
pub mod employees;
pub use employees::Entity as Employees;
pub mod user_roles;
pub use user_roles::Entity as UserRoles;
pub mod users;
pub use users::Entity as Users;
pub mod vendors;
pub use vendors::Entity as Vendors;
