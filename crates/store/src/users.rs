//! # User Repository
//!
//! CRUD for users plus role association management and credential checks.
//! Plaintext passwords never reach the store; hashing and comparison are
//! delegated to a [`CredentialHasher`].

use entity::{user_roles, users};
use error::{AppError, Result};
use sea_orm::{
    sea_query::OnConflict,
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::credential::CredentialHasher;

/// Fields accepted when creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserDraft {
    #[validate(length(min = 5))]
    pub username:     String,
    #[validate(length(min = 10, max = 13))]
    pub phone_number: String,
    pub password:     SecretString,
}

/// Fields accepted when updating a user. A `None` password leaves the
/// stored credential unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 10, max = 13))]
    pub phone_number: String,
    pub password:     Option<SecretString>,
}

/// Lists all users, ordered by username.
pub async fn list_users<C: ConnectionTrait>(db: &C) -> Result<Vec<users::Model>> {
    let rows = users::Entity::find()
        .order_by_asc(users::Column::Username)
        .all(db)
        .await?;
    Ok(rows)
}

/// Fetches a single user by username.
pub async fn get_user<C: ConnectionTrait>(db: &C, username: &str) -> Result<users::Model> {
    users::Entity::find_by_id(username.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{}' not found", username)))
}

/// Creates a user, hashing the supplied password before it is stored.
///
/// This path is deliberately coarse: any failure — validation, hashing,
/// insert, re-read — is reported as `None` rather than propagated. The
/// underlying cause is logged, not returned.
pub async fn create_user<C, H>(db: &C, hasher: &H, draft: UserDraft) -> Option<users::Model>
where
    C: ConnectionTrait,
    H: CredentialHasher + ?Sized,
{
    match try_create_user(db, hasher, draft).await {
        Ok(user) => Some(user),
        Err(err) => {
            warn!(error = %err, "User creation failed");
            None
        }
    }
}

async fn try_create_user<C, H>(db: &C, hasher: &H, draft: UserDraft) -> Result<users::Model>
where
    C: ConnectionTrait,
    H: CredentialHasher + ?Sized,
{
    draft.validate()?;

    let password_hash = hasher
        .hash(&draft.password)
        .map_err(|e| AppError::internal(e.to_string()))?;

    let username = draft.username.clone();
    users::ActiveModel {
        username:      Set(draft.username),
        password_hash: Set(password_hash),
        phone_number:  Set(draft.phone_number),
    }
    .insert(db)
    .await?;

    info!(username = %username, "Created user");

    get_user(db, &username).await
}

/// Updates a user's phone number and, when a new password is supplied,
/// re-hashes and replaces the stored credential. Returns the stored row.
pub async fn update_user<C, H>(
    db: &C,
    hasher: &H,
    username: &str,
    update: UserUpdate,
) -> Result<users::Model>
where
    C: ConnectionTrait,
    H: CredentialHasher + ?Sized,
{
    update.validate()?;

    let mut model = users::ActiveModel {
        username: Set(username.to_owned()),
        phone_number: Set(update.phone_number),
        ..Default::default()
    };
    if let Some(password) = &update.password {
        let password_hash = hasher
            .hash(password)
            .map_err(|e| AppError::internal(e.to_string()))?;
        model.password_hash = Set(password_hash);
    }
    model.update(db).await?;

    info!(username, "Updated user");

    get_user(db, username).await
}

/// Deletes a user together with all of their role associations. Both
/// steps run in one transaction. Deleting an absent username is a no-op.
pub async fn delete_user<C: TransactionTrait>(db: &C, username: &str) -> Result<()> {
    let txn = db.begin().await?;

    user_roles::Entity::delete_many()
        .filter(user_roles::Column::Username.eq(username))
        .exec(&txn)
        .await?;

    users::Entity::delete_by_id(username.to_owned())
        .exec(&txn)
        .await?;

    txn.commit().await?;

    info!(username, "Deleted user");

    Ok(())
}

/// Lists the roles held by a user, ordered by role name.
pub async fn roles_for_user<C: ConnectionTrait>(db: &C, username: &str) -> Result<Vec<String>> {
    let rows = user_roles::Entity::find()
        .filter(user_roles::Column::Username.eq(username))
        .order_by_asc(user_roles::Column::Role)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|row| row.role).collect())
}

/// Grants a role to a user. Idempotent: granting a role the user already
/// holds leaves exactly one association row and reports success.
pub async fn add_role<C: ConnectionTrait>(db: &C, username: &str, role: &str) -> Result<()> {
    let model = user_roles::ActiveModel {
        username: Set(username.to_owned()),
        role:     Set(role.to_owned()),
    };

    user_roles::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([user_roles::Column::Username, user_roles::Column::Role])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    info!(username, role, "Granted role to user");

    Ok(())
}

/// Revokes a role from a user. Revoking an association that does not
/// exist is a no-op, not an error.
pub async fn remove_role<C: ConnectionTrait>(db: &C, username: &str, role: &str) -> Result<()> {
    user_roles::Entity::delete_many()
        .filter(user_roles::Column::Username.eq(username))
        .filter(user_roles::Column::Role.eq(role))
        .exec(db)
        .await?;

    info!(username, role, "Revoked role from user");

    Ok(())
}

/// Checks a plaintext password against a user's stored credential.
///
/// Fails with NotFound when the username has no matching row; otherwise
/// the comparison is delegated to the hasher and never touches plaintext
/// in this layer.
pub async fn check_username_password<C, H>(
    db: &C,
    hasher: &H,
    username: &str,
    password: &SecretString,
) -> Result<bool>
where
    C: ConnectionTrait,
    H: CredentialHasher + ?Sized,
{
    let user = get_user(db, username).await?;
    Ok(hasher.matches(password, &user.password_hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str) -> UserDraft {
        UserDraft {
            username:     username.to_string(),
            phone_number: "312-555-0100".to_string(),
            password:     SecretString::from("hunter2".to_string()),
        }
    }

    #[test]
    fn test_draft_username_boundaries() {
        assert!(draft("abcd").validate().is_err());
        assert!(draft("abcde").validate().is_ok());
    }

    #[test]
    fn test_draft_accepts_valid_fields() {
        assert!(draft("asmith").validate().is_ok());
    }

    #[test]
    fn test_draft_phone_number_boundaries() {
        let mut d = draft("asmith");
        d.phone_number = "0".repeat(9);
        assert!(d.validate().is_err());
        d.phone_number = "0".repeat(10);
        assert!(d.validate().is_ok());
        d.phone_number = "0".repeat(13);
        assert!(d.validate().is_ok());
        d.phone_number = "0".repeat(14);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_update_rejects_short_phone_number() {
        let update = UserUpdate {
            phone_number: "555-0100".to_string(),
            password:     None,
        };
        assert!(update.validate().is_err());
    }
}
