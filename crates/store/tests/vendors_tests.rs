//! Vendor repository behavior against a mocked database.

use entity::vendors;
use error::AppError;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use store::vendors::{
    create_vendor, delete_vendor, get_vendor, list_vendors, update_vendor, vendors_by_department,
    VendorDraft,
};

fn vendor(id: i32, vendor_name: &str, department_id: i32) -> vendors::Model {
    vendors::Model {
        id,
        vendor_name: vendor_name.to_string(),
        contact: "Jordan Reyes".to_string(),
        address: "12 Forge Rd".to_string(),
        phone_number: "312-555-0142".to_string(),
        department_id,
    }
}

fn draft(vendor_name: &str, department_id: i32) -> VendorDraft {
    VendorDraft {
        vendor_name:   vendor_name.to_string(),
        contact:       "Jordan Reyes".to_string(),
        address:       "12 Forge Rd".to_string(),
        phone_number:  "312-555-0142".to_string(),
        department_id,
    }
}

#[tokio::test]
async fn test_list_vendors_returns_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![vendor(5, "Acme Supply", 1), vendor(6, "Bolt Co", 2)]])
        .into_connection();

    let rows = list_vendors(&db).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_vendors_by_department_returns_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![vendor(5, "Acme Supply", 1)]])
        .into_connection();

    let rows = vendors_by_department(&db, 1).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_id, 1);
}

#[tokio::test]
async fn test_get_vendor_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<vendors::Model>::new()])
        .into_connection();

    let err = get_vendor(&db, 5).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_vendor_round_trip() {
    let stored = vendor(5, "Acme Supply", 1);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()], vec![stored.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 5,
            rows_affected:  1,
        }])
        .into_connection();

    let created = create_vendor(&db, draft("Acme Supply", 1)).await.unwrap();
    assert_eq!(created, stored);
}

#[tokio::test]
async fn test_update_vendor_returns_refetched_row() {
    // The second appended result is the canonical row the database holds
    // after the update; the returned value must come from that re-fetch.
    let returned_by_update = vendor(5, "Acme Supply", 1);
    let mut canonical = vendor(5, "Acme Supply", 1);
    canonical.contact = "Sam Ortiz".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![returned_by_update], vec![canonical.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected:  1,
        }])
        .into_connection();

    let updated = update_vendor(&db, 5, draft("Acme Supply", 1)).await.unwrap();
    assert_eq!(updated, canonical);
}

#[tokio::test]
async fn test_update_vendor_missing_row_is_zero_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<vendors::Model>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected:  0,
        }])
        .into_connection();

    let err = update_vendor(&db, 99, draft("Acme Supply", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ZeroRowsAffected));
}

#[tokio::test]
async fn test_delete_vendor_absent_id_is_noop() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected:  0,
        }])
        .into_connection();

    assert!(delete_vendor(&db, 99).await.is_ok());
}
