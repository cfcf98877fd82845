//! # Vendor Repository
//!
//! CRUD for vendors. Updates re-fetch the row so callers always receive
//! the canonical post-update state.

use entity::vendors;
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Fields accepted when creating or replacing a vendor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VendorDraft {
    #[validate(length(min = 2, max = 255))]
    pub vendor_name:   String,
    #[validate(length(min = 1, max = 255))]
    pub contact:       String,
    #[validate(length(min = 2, max = 255))]
    pub address:       String,
    #[validate(length(min = 10, max = 13))]
    pub phone_number:  String,
    pub department_id: i32,
}

/// Lists all vendors, ordered by id.
pub async fn list_vendors<C: ConnectionTrait>(db: &C) -> Result<Vec<vendors::Model>> {
    let rows = vendors::Entity::find()
        .order_by_asc(vendors::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Lists the vendors of one department, ordered by id.
pub async fn vendors_by_department<C: ConnectionTrait>(
    db: &C,
    department_id: i32,
) -> Result<Vec<vendors::Model>> {
    let rows = vendors::Entity::find()
        .filter(vendors::Column::DepartmentId.eq(department_id))
        .order_by_asc(vendors::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Fetches a single vendor by id.
pub async fn get_vendor<C: ConnectionTrait>(db: &C, id: i32) -> Result<vendors::Model> {
    vendors::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Vendor {} not found", id)))
}

/// Creates a vendor and returns the stored row.
pub async fn create_vendor<C: ConnectionTrait>(
    db: &C,
    draft: VendorDraft,
) -> Result<vendors::Model> {
    draft.validate()?;

    let inserted = vendors::ActiveModel {
        id:            NotSet,
        vendor_name:   Set(draft.vendor_name),
        contact:       Set(draft.contact),
        address:       Set(draft.address),
        phone_number:  Set(draft.phone_number),
        department_id: Set(draft.department_id),
    }
    .insert(db)
    .await?;

    info!(
        vendor_id = inserted.id,
        department_id = inserted.department_id,
        "Created vendor"
    );

    get_vendor(db, inserted.id).await
}

/// Replaces a vendor's mutable fields and returns the stored row.
///
/// Fails with [`AppError::ZeroRowsAffected`] when no row with the given
/// id exists at mutation time.
pub async fn update_vendor<C: ConnectionTrait>(
    db: &C,
    id: i32,
    draft: VendorDraft,
) -> Result<vendors::Model> {
    draft.validate()?;

    vendors::ActiveModel {
        id:            Set(id),
        vendor_name:   Set(draft.vendor_name),
        contact:       Set(draft.contact),
        address:       Set(draft.address),
        phone_number:  Set(draft.phone_number),
        department_id: Set(draft.department_id),
    }
    .update(db)
    .await?;

    info!(vendor_id = id, "Updated vendor");

    get_vendor(db, id).await
}

/// Deletes a vendor. Deleting an id that does not exist is a no-op.
pub async fn delete_vendor<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
    vendors::Entity::delete_by_id(id).exec(db).await?;

    info!(vendor_id = id, "Deleted vendor");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VendorDraft {
        VendorDraft {
            vendor_name:   "Acme Supply".to_string(),
            contact:       "Jordan Reyes".to_string(),
            address:       "12 Forge Rd".to_string(),
            phone_number:  "312-555-0142".to_string(),
            department_id: 1,
        }
    }

    #[test]
    fn test_draft_accepts_valid_fields() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_empty_contact() {
        let mut d = draft();
        d.contact = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_name_boundaries() {
        let mut d = draft();
        d.vendor_name = "A".to_string();
        assert!(d.validate().is_err());
        d.vendor_name = "Ac".to_string();
        assert!(d.validate().is_ok());
        d.vendor_name = "x".repeat(255);
        assert!(d.validate().is_ok());
        d.vendor_name = "x".repeat(256);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_address_boundaries() {
        let mut d = draft();
        d.address = "a".to_string();
        assert!(d.validate().is_err());
        d.address = "a".repeat(255);
        assert!(d.validate().is_ok());
        d.address = "a".repeat(256);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_phone_number_boundaries() {
        let mut d = draft();
        d.phone_number = "0".repeat(9);
        assert!(d.validate().is_err());
        d.phone_number = "0".repeat(10);
        assert!(d.validate().is_ok());
        d.phone_number = "0".repeat(14);
        assert!(d.validate().is_err());
    }
}
