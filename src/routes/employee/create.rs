use actix_web::{post, web};
use entity::employee::Model as EmployeeModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::employee::REmployee;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<REmployee>,
) -> ApiResult<EmployeeModel> {
    let data = body.into_inner().validated()?;
    let employee = db.create_employee(data).await?;
    Ok(ApiResponse::Created(employee))
}
