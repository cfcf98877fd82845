//! Integration tests for the error taxonomy.
//!
//! Exercises the classification surface the repositories depend on: each
//! variant keeps a distinct code, and Sea-ORM failures land in the right
//! bucket.

use error::{AppError, Result, ResultExt};

#[test]
fn taxonomy_codes_are_distinct() {
    let errors = [
        AppError::not_found("x"),
        AppError::connectivity("x"),
        AppError::constraint("x"),
        AppError::ZeroRowsAffected,
        AppError::validation("x"),
        AppError::internal("x"),
        AppError::database("x"),
        AppError::config("x"),
        AppError::migration("x"),
    ];

    let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len(), "duplicate error codes");
}

#[test]
fn connectivity_and_constraint_are_distinguishable() {
    let conn = AppError::connectivity("store unreachable");
    let constraint = AppError::constraint("fk violation");

    assert_ne!(conn.code(), constraint.code());
    assert_ne!(conn.status(), constraint.status());
}

#[test]
fn db_err_record_not_updated_maps_to_zero_rows() {
    let err: AppError = sea_orm::DbErr::RecordNotUpdated.into();
    assert!(matches!(err, AppError::ZeroRowsAffected));
}

#[test]
fn result_ext_context_chains() {
    fn inner() -> Result<()> { Err(AppError::not_found("Department")) }

    let err = inner().context("Cascade delete").unwrap_err();
    assert_eq!(err.message(), "Cascade delete: Department");
    assert_eq!(err.code(), "NOT_FOUND");
}
