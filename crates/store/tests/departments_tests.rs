//! Department repository behavior against a mocked database.

use entity::departments;
use error::AppError;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use store::departments::{
    create_department, delete_department, get_department, list_departments, update_department,
    DepartmentDraft,
};

fn department(id: i32, name: &str) -> departments::Model {
    departments::Model {
        id,
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_list_departments_returns_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department(1, "Hardware"), department(2, "Garden")]])
        .into_connection();

    let rows = list_departments(&db).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Hardware");
    assert_eq!(rows[1].name, "Garden");
}

#[tokio::test]
async fn test_get_department_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<departments::Model>::new()])
        .into_connection();

    let err = get_department(&db, 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_department_round_trip() {
    let stored = department(1, "Hardware");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()], vec![stored.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected:  1,
        }])
        .into_connection();

    let created = create_department(
        &db,
        DepartmentDraft {
            name: "Hardware".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(created, stored);
}

#[tokio::test]
async fn test_create_department_rejects_invalid_draft() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = create_department(
        &db,
        DepartmentDraft {
            name: String::new(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_update_department_missing_row_is_zero_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<departments::Model>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected:  0,
        }])
        .into_connection();

    let err = update_department(
        &db,
        42,
        DepartmentDraft {
            name: "Garden".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::ZeroRowsAffected));
}

#[tokio::test]
async fn test_update_department_returns_stored_row() {
    let stored = department(1, "Garden");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()], vec![stored.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected:  1,
        }])
        .into_connection();

    let updated = update_department(
        &db,
        1,
        DepartmentDraft {
            name: "Garden".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated, stored);
}

#[tokio::test]
async fn test_delete_department_cascades_and_reports_department_count() {
    // Two employees and one vendor hang off the department.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  2,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  1,
            },
        ])
        .into_connection();

    let removed = delete_department(&db, 1).await.unwrap();
    assert_eq!(removed, 1);
}

#[tokio::test]
async fn test_delete_department_absent_id_reports_zero() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  0,
            },
        ])
        .into_connection();

    let removed = delete_department(&db, 99).await.unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_delete_department_runs_children_before_parent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected:  1,
            },
        ])
        .into_connection();

    delete_department(&db, 1).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    let employees_at = log.find("employees").unwrap();
    let vendors_at = log.find("vendors").unwrap();
    let departments_at = log.find("departments").unwrap();
    assert!(employees_at < vendors_at);
    assert!(vendors_at < departments_at);
}
