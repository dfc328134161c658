use actix_web::{get, web};
use entity::employee::Model as EmployeeModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<EmployeeModel> {
    let id = path.into_inner();
    match db.get_employee(id).await? {
        Some(employee) => Ok(ApiResponse::Ok(employee)),
        None => Err(AppError::NotFound),
    }
}
