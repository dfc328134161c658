// Status mapping for store errors surfaced through AppError.

use actix_web::{http::StatusCode, ResponseError};
use employee_records::types::error::AppError;
use sea_orm::DbErr;

#[test]
fn test_missing_record_maps_to_not_found() {
    let err = AppError::from(DbErr::RecordNotFound("employee".to_string()));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn test_lost_update_maps_to_not_found() {
    // A row deleted by a concurrent request between fetch and write shows
    // up as RecordNotUpdated; the caller should get a 404, not a 500.
    let err = AppError::from(DbErr::RecordNotUpdated);
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn test_other_db_errors_stay_internal() {
    let err = AppError::from(DbErr::Custom("connection reset".to_string()));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
