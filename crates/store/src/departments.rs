//! # Department Repository
//!
//! CRUD for departments plus the cascade delete that removes a department
//! together with its employees and vendors in one transaction.

use entity::{departments, employees, vendors};
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Fields accepted when creating or replacing a department.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentDraft {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
}

/// Lists all departments, ordered by id.
pub async fn list_departments<C: ConnectionTrait>(db: &C) -> Result<Vec<departments::Model>> {
    let rows = departments::Entity::find()
        .order_by_asc(departments::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Fetches a single department by id.
pub async fn get_department<C: ConnectionTrait>(db: &C, id: i32) -> Result<departments::Model> {
    departments::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {} not found", id)))
}

/// Creates a department and returns the stored row.
///
/// The row is re-read after the insert so callers always see the
/// storage-confirmed representation.
pub async fn create_department<C: ConnectionTrait>(
    db: &C,
    draft: DepartmentDraft,
) -> Result<departments::Model> {
    draft.validate()?;

    let inserted = departments::ActiveModel {
        name: Set(draft.name),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(department_id = inserted.id, "Created department");

    get_department(db, inserted.id).await
}

/// Replaces a department's mutable fields and returns the stored row.
///
/// Fails with [`AppError::ZeroRowsAffected`] when no row with the given
/// id exists at mutation time.
pub async fn update_department<C: ConnectionTrait>(
    db: &C,
    id: i32,
    draft: DepartmentDraft,
) -> Result<departments::Model> {
    draft.validate()?;

    departments::ActiveModel {
        id:   Set(id),
        name: Set(draft.name),
    }
    .update(db)
    .await?;

    info!(department_id = id, "Updated department");

    get_department(db, id).await
}

/// Deletes a department together with every employee and vendor that
/// references it.
///
/// Children are removed first, unconditionally, so the operation succeeds
/// whether or not the store enforces the foreign keys itself. All three
/// steps run in one transaction; a mid-sequence failure rolls back the
/// whole cascade. Returns the number of department rows removed (0 when
/// the id does not exist, 1 otherwise).
pub async fn delete_department<C: TransactionTrait>(db: &C, id: i32) -> Result<u64> {
    let txn = db.begin().await?;

    let removed_employees = employees::Entity::delete_many()
        .filter(employees::Column::DepartmentId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;

    let removed_vendors = vendors::Entity::delete_many()
        .filter(vendors::Column::DepartmentId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;

    let removed = departments::Entity::delete_by_id(id)
        .exec(&txn)
        .await?
        .rows_affected;

    txn.commit().await?;

    info!(
        department_id = id,
        removed_employees, removed_vendors, "Deleted department"
    );

    Ok(removed)
}
