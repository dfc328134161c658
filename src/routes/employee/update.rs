use actix_web::{put, web};
use entity::employee::Model as EmployeeModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::employee::REmployee;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
    body: web::Json<REmployee>,
) -> ApiResult<EmployeeModel> {
    let id = path.into_inner();
    let data = body.into_inner().validated()?;
    match db.update_employee(id, data).await? {
        Some(employee) => Ok(ApiResponse::Ok(employee)),
        None => Err(AppError::NotFound),
    }
}
