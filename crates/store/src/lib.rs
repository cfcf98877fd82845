//! # Anvil Persistence Core
//!
//! Entity repositories and access projection for the Anvil store backend.
//!
//! ## Modules
//!
//! - [`departments`], [`employees`], [`vendors`], [`users`]: one repository
//!   module per entity family. Repositories hold no entity state; they are
//!   free async functions parameterized by the storage capability, so the
//!   same operation runs against the pooled connection or inside a
//!   transaction.
//! - [`projection`]: role-conditioned views (pure functions, no storage).
//! - [`access`]: the caller's role set, supplied by the authentication
//!   layer above this crate.
//! - [`credential`]: the hashing seam used by the user repository.
//! - [`config`]: database configuration and pool construction.
//!
//! Department deletion is the one multi-table operation: employees and
//! vendors referencing the department are removed first, inside a single
//! transaction (see [`departments::delete_department`]).

pub mod access;
pub mod config;
pub mod credential;
pub mod departments;
pub mod employees;
pub mod projection;
pub mod users;
pub mod vendors;

pub use error::{AppError, Result};
